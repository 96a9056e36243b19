use crate::cli::args::ExtractArgs;
use crate::exit_codes::SUCCESS;

use sonda_core::report::ExtractionSummary;

pub fn run(args: ExtractArgs) -> anyhow::Result<i32> {
    let extraction = sonda_core::extract(&args.file, &args.variable, &args.timestamp_field)?;
    let summary = ExtractionSummary::from_extraction(&extraction, false);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(SUCCESS);
    }

    println!("Archivo:   {}", args.file.display());
    println!("Variable:  {}", args.variable);
    println!("Artículos: {}", summary.count);
    println!("Estado:    {}", extraction.state.as_str());
    if let Some(dt) = &summary.local_datetime {
        println!("Última actualización: {}", dt);
    }
    Ok(SUCCESS)
}
