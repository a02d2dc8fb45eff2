//! End-to-end scans over temporary CSV files.

use std::io::Write;
use tagsift::report::write_report;
use tagsift::{scan_file, MatchReason, RuleSet, ScanError};
use tempfile::NamedTempFile;

fn create_test_csv(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_scan_report() {
    let file = create_test_csv(
        b"timestamp,domain,reasons\n\
          2023-11-01 00:00,example.com,\"Gambling, Spam\"\n\
          2023-11-01 00:01,mysussexhome.com,\n\
          2023-11-01 00:02,casinoworld.com,\n\
          2023-11-01 00:03,alphabet.com,Spam\n",
    );

    let report = scan_file(file.path(), &RuleSet::default(), usize::MAX).unwrap();
    assert_eq!(report.rows_scanned, 4);

    let mut buf = Vec::new();
    write_report(&mut buf, &report).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\nAll Unique Tags found:\n\
         'Spam': 2\n\
         'Gambling': 1\n\
         \nTarget Matches:\n\
         Row 2: 2023-11-01 00:00 - example.com (Tag: Gambling)\n\
         Row 4: 2023-11-01 00:02 - casinoworld.com (Domain Keyword: casino)\n"
    );
}

#[test]
fn test_bom_header_and_matched_name_fallback() {
    let mut content = "\u{feff}timestamp,matched_name,reasons\n".as_bytes().to_vec();
    content.extend_from_slice(b"2023-11-02,sexshop.example,\n");
    let file = create_test_csv(&content);

    let report = scan_file(file.path(), &RuleSet::default(), usize::MAX).unwrap();
    assert_eq!(report.matches.len(), 1);
    let m = &report.matches[0];
    assert_eq!(m.row, 2);
    assert_eq!(m.timestamp, "2023-11-02");
    assert_eq!(m.domain, "sexshop.example");
    assert_eq!(m.reason, MatchReason::DomainKeyword("sex".into()));
}

#[test]
fn test_quoted_field_with_embedded_commas_and_large_size() {
    let big_tag = "x".repeat(1_000_000);
    let content = format!(
        "timestamp,domain,reasons\n\"2023-11-03\",\"quiet.org\",\"Spam,{}\"\n",
        big_tag
    );
    let file = create_test_csv(content.as_bytes());

    let report = scan_file(file.path(), &RuleSet::default(), usize::MAX).unwrap();
    assert_eq!(report.tags.count("Spam"), 1);
    assert_eq!(report.tags.count(&big_tag), 1);
    // a run of x's contains "xxx"
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].reason, MatchReason::Tag(big_tag));
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = scan_file(&path, &RuleSet::default(), usize::MAX).unwrap_err();
    assert!(matches!(err, ScanError::Open { .. }), "{:?}", err);
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_mid_scan_failure_yields_no_report() {
    let mut content = b"timestamp,domain,reasons\n2023-11-01,casino.com,Gambling\n".to_vec();
    content.extend_from_slice(b"2023-11-01,");
    content.extend_from_slice(&[0xc3, 0x28]);
    content.extend_from_slice(b",Spam\n");
    let file = create_test_csv(&content);

    let err = scan_file(file.path(), &RuleSet::default(), usize::MAX).unwrap_err();
    assert!(matches!(err, ScanError::Read { row: 3, .. }), "{:?}", err);
}
