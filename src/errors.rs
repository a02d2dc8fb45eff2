use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure while opening or reading the source. The first one aborts the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read row {row}: {source}")]
    Read {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// `row` uses the reported numbering (header is row 1).
    pub fn read(row: usize, source: csv::Error) -> Self {
        Self::Read { row, source }
    }
}
