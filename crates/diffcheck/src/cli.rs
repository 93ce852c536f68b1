use clap::Parser;
use std::path::PathBuf;

/// Function-level code comparison with style-insensitive matching
#[derive(Debug, Parser)]
#[command(name = "diffcheck", version, about)]
pub struct Cli {
    /// Path to the original source file
    pub original: PathBuf,

    /// Path to the new source file
    pub new: PathBuf,

    /// Print only the summary of missing/new/changed functions
    #[arg(long)]
    pub summary_only: bool,

    /// Write the report to a file (or into a directory) instead of stdout;
    /// with no value, saves into the configured save_dir
    #[arg(long, num_args = 0..=1, default_missing_value = "", value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,

    /// Specify configuration file path
    #[arg(long, env = "DIFFCHECK_CONFIG")]
    pub config: Option<String>,

    /// Log level
    #[arg(long, env = "DIFFCHECK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
