use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sonda",
    version,
    about = "Cache diagnostics for the section API sources — item counts and refresh times for the embedded caches"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect every configured section source and print the cache report
    Report(ReportArgs),
    /// Run a single extraction against one source file
    Extract(ExtractArgs),
    /// Inspect the on-disk cache sidecars (<label>-cache.json)
    Sidecar(SidecarArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// YAML file overriding the built-in section targets
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Also count items surviving a title/link dedup pass
    #[arg(long)]
    pub dedup: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Source file to inspect
    #[arg(long)]
    pub file: PathBuf,

    /// Cache variable to look for
    #[arg(long, default_value = sonda_core::targets::DEFAULT_NEW_VAR)]
    pub variable: String,

    /// Numeric field holding the refresh time in epoch milliseconds
    #[arg(long, default_value = sonda_core::targets::DEFAULT_TIMESTAMP_FIELD)]
    pub timestamp_field: String,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SidecarArgs {
    /// Directory holding the <label>-cache.json files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}
