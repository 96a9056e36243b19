use crate::cli::args::SidecarArgs;
use crate::exit_codes::SUCCESS;

use sonda_core::report::{console, json};
use sonda_core::sidecar::{summarize, SidecarReport};
use sonda_core::targets;

pub fn run(args: SidecarArgs) -> anyhow::Result<i32> {
    let labels: Vec<String> = targets::default_targets()
        .into_iter()
        .map(|t| t.label)
        .collect();
    let sections = summarize(&args.dir, &labels);

    if args.format == "json" {
        let report = SidecarReport { sections };
        println!("{}", json::to_json(&report)?);
    } else {
        print!("{}", console::format_sidecar_text(&sections));
    }
    Ok(SUCCESS)
}
