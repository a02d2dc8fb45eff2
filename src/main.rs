use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use tagsift::args::{Args, INPUT_PATH};
use tagsift::report::run;
use tagsift::utils::{setup_logging, validate_args};
use tagsift::RuleSet;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let total_start_time = Instant::now();
    let rules = RuleSet::default();
    let code = run(
        &mut io::stdout().lock(),
        Path::new(INPUT_PATH),
        &rules,
        args.max_rows,
        args.preview_limit,
    )?;

    if code != 0 {
        std::process::exit(code);
    }

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(())
}
