use csv::StringRecord;
use tracing::{info, warn};

const BOM_TIMESTAMP: &str = "\u{feff}timestamp";
const TIMESTAMP: &str = "timestamp";
const DOMAIN: &str = "domain";
const MATCHED_NAME: &str = "matched_name";
const REASONS: &str = "reasons";

/// Column positions of the recognized fields, resolved once from the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordLayout {
    pub timestamp: Option<usize>,
    pub domain: Option<usize>,
    pub reasons: Option<usize>,
}

/// Borrowed view of the three fields the scanner cares about.
/// Absent columns and short rows read as empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub timestamp: &'a str,
    pub domain: &'a str,
    pub reasons: &'a str,
}

impl RecordLayout {
    pub fn from_headers(headers: &StringRecord) -> Self {
        // a repeated column name resolves to its last occurrence
        let position = |name: &str| {
            (0..headers.len())
                .rev()
                .find(|&i| headers.get(i) == Some(name))
        };

        let layout = Self {
            timestamp: position(BOM_TIMESTAMP).or_else(|| position(TIMESTAMP)),
            // matched_name is only consulted when there is no domain column at all
            domain: position(DOMAIN).or_else(|| position(MATCHED_NAME)),
            reasons: position(REASONS),
        };

        info!(
            action = "resolve",
            component = "header",
            timestamp = ?layout.timestamp,
            domain = ?layout.domain,
            reasons = ?layout.reasons,
            "Resolved header columns"
        );
        if layout.reasons.is_none() {
            warn!(action = "resolve", component = "header", column = REASONS, "Column not found; tag matching disabled");
        }
        if layout.domain.is_none() {
            warn!(action = "resolve", component = "header", column = DOMAIN, "Column not found; domain keyword matching disabled");
        }

        layout
    }

    pub fn extract<'a>(&self, row: &'a StringRecord) -> Record<'a> {
        let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");
        Record {
            timestamp: field(self.timestamp),
            domain: field(self.domain),
            reasons: field(self.reasons),
        }
    }
}
