pub mod args;
pub mod errors;
pub mod record;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use errors::ScanError;
pub use rules::RuleSet;
pub use scanner::{scan_file, scan_reader};
pub use stats::{Match, MatchReason, ScanReport, TagTally};
