use clap::Parser;

/// Dataset scanned on every run.
pub const INPUT_PATH: &str = "2311eb.csv";

pub const DEFAULT_PREVIEW_LIMIT: usize = 50_000;
pub const DEFAULT_MAX_ROWS: usize = 6_500_000;

#[derive(Parser, Debug)]
#[command(
    name = "tagsift",
    about = "Scan a domain dataset for rows tagged with, or named after, target content categories",
    version,
    long_about = None
)]
pub struct Args {
    /// Hard ceiling on the number of data rows processed
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Row count announced in the status line (not enforced)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub preview_limit: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
