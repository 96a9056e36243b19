use super::args::*;

pub mod extract;
pub mod report;
pub mod sidecar;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Report(args) => report::run(args),
        Command::Extract(args) => extract::run(args),
        Command::Sidecar(args) => sidecar::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
