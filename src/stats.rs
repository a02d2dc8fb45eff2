use std::collections::HashMap;
use std::fmt;

/// Occurrence count per distinct tag, remembering first-seen order so that
/// ties keep a stable order in the report.
#[derive(Debug, Default, Clone)]
pub struct TagTally {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl TagTally {
    pub fn record(&mut self, tag: &str) {
        match self.index.get(tag) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(tag.to_string(), self.entries.len());
                self.entries.push((tag.to_string(), 1));
            }
        }
    }

    pub fn count(&self, tag: &str) -> u32 {
        self.index.get(tag).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags by descending count; equal counts stay in first-seen order.
    pub fn most_common(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    Tag(String),
    DomainKeyword(String),
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Tag(tag) => write!(f, "Tag: {}", tag),
            MatchReason::DomainKeyword(keyword) => write!(f, "Domain Keyword: {}", keyword),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub timestamp: String,
    pub domain: String,
    pub reason: MatchReason,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub tags: TagTally,
    pub matches: Vec<Match>,
    pub rows_scanned: usize,
    /// Set when the row ceiling stopped the scan before the end of input.
    pub truncated: bool,
}
