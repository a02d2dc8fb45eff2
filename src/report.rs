use std::io::{self, Write};
use std::path::Path;
use tracing::error;

use crate::rules::RuleSet;
use crate::scanner::scan_file;
use crate::stats::ScanReport;

/// Status line, then either the full report or a single `Error:` line.
/// Returns the process exit code.
pub fn run<W: Write>(
    out: &mut W,
    path: &Path,
    rules: &RuleSet,
    max_rows: usize,
    preview_limit: usize,
) -> io::Result<i32> {
    write_status_line(out, path, preview_limit)?;
    out.flush()?;

    match scan_file(path, rules, max_rows) {
        Ok(report) => {
            write_report(out, &report)?;
            out.flush()?;
            Ok(0)
        }
        Err(e) => {
            error!(action = "abort", component = "analysis", error = %e, "Scan failed");
            writeln!(out, "Error: {}", e)?;
            out.flush()?;
            Ok(1)
        }
    }
}

pub fn write_status_line<W: Write>(
    out: &mut W,
    path: &Path,
    preview_limit: usize,
) -> io::Result<()> {
    writeln!(out, "Reading {} (first {} rows)...", path.display(), preview_limit)
}

pub fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "\nAll Unique Tags found:")?;
    for (tag, count) in report.tags.most_common() {
        writeln!(out, "'{}': {}", tag, count)?;
    }

    writeln!(out, "\nTarget Matches:")?;
    for m in &report.matches {
        writeln!(out, "Row {}: {} - {} ({})", m.row, m.timestamp, m.domain, m.reason)?;
    }

    Ok(())
}
