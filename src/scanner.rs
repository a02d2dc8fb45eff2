use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::errors::ScanError;
use crate::record::{Record, RecordLayout};
use crate::rules::RuleSet;
use crate::stats::{Match, MatchReason, ScanReport};

/// Header row plus 1-based display.
const ROW_NUMBER_OFFSET: usize = 2;

pub fn scan_file(path: &Path, rules: &RuleSet, max_rows: usize) -> Result<ScanReport, ScanError> {
    info!(action = "open", component = "row_scan", file_path = ?path, "Opening source");
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    scan_reader(file, rules, max_rows)
}

/// Streams every data row of a CSV source, at most `max_rows` of them.
/// The first read or decode error aborts the scan and discards what was
/// accumulated so far.
pub fn scan_reader<R: Read>(
    source: R,
    rules: &RuleSet,
    max_rows: usize,
) -> Result<ScanReport, ScanError> {
    let start_time = Instant::now();
    info!(action = "start", component = "row_scan", max_rows, "Starting row scan");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers().map_err(|e| ScanError::read(1, e))?.clone();
    let layout = RecordLayout::from_headers(&headers);

    let mut report = ScanReport::default();
    let mut row = StringRecord::new();
    let mut index = 0;

    loop {
        let more = reader
            .read_record(&mut row)
            .map_err(|e| ScanError::read(index + ROW_NUMBER_OFFSET, e))?;
        if !more {
            break;
        }
        if index >= max_rows {
            warn!(action = "truncate", component = "row_scan", max_rows, "Row ceiling reached; remaining rows skipped");
            report.truncated = true;
            break;
        }

        scan_row(index, layout.extract(&row), rules, &mut report);
        index += 1;
    }
    report.rows_scanned = index;

    let scan_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "row_scan",
        rows_scanned = report.rows_scanned,
        distinct_tags = report.tags.len(),
        matches = report.matches.len(),
        truncated = report.truncated,
        duration_ms = scan_time.as_millis(),
        "Row scan completed"
    );

    Ok(report)
}

/// Tallies every tag of the row, then records at most one match: the first
/// tag hitting a target wins, otherwise the domain keyword fallback runs.
fn scan_row(index: usize, record: Record<'_>, rules: &RuleSet, report: &mut ScanReport) {
    let mut reason = None;

    if !record.reasons.is_empty() {
        for tag in record.reasons.split(',').map(str::trim) {
            report.tags.record(tag);
            if reason.is_none() && rules.tag_hits(tag) {
                reason = Some(MatchReason::Tag(tag.to_string()));
            }
        }
    }

    if reason.is_none() && !record.domain.is_empty() {
        reason = rules
            .domain_keyword(record.domain)
            .map(|keyword| MatchReason::DomainKeyword(keyword.to_string()));
    }

    if let Some(reason) = reason {
        let row = index + ROW_NUMBER_OFFSET;
        debug!(action = "match", component = "row_scan", row, domain = record.domain, reason = %reason, "Row matched");
        report.matches.push(Match {
            row,
            timestamp: record.timestamp.to_string(),
            domain: record.domain.to_string(),
            reason,
        });
    }
}
