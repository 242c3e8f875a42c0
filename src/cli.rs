use clap::Parser;
use std::path::PathBuf;

/// Grid of text chips. Click a chip (or press Enter on it) to insert a fresh
/// batch right after it.
#[derive(Debug, Parser)]
#[command(name = "chipgrid", version, about)]
pub struct Cli {
    /// Seed for chip generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
