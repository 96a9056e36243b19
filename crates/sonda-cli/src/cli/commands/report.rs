use crate::cli::args::ReportArgs;
use crate::exit_codes::SUCCESS;

use sonda_core::report::{console, inspect, json};
use sonda_core::targets;

pub fn run(args: ReportArgs) -> anyhow::Result<i32> {
    let targets = match &args.config {
        Some(path) => targets::load_targets(path)?,
        None => targets::default_targets(),
    };

    let report = inspect(&targets, args.dedup)?;

    if args.format == "json" {
        println!("{}", json::to_json(&report)?);
    } else {
        print!("{}", console::format_text(&report));
    }
    Ok(SUCCESS)
}
