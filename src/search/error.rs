use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The source file could not be opened.
    #[error("IO error: cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed after the file was opened.
    #[error("Scan error: {} at line {line}: {source}", path.display())]
    Scan {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    pub fn is_io(&self) -> bool {
        matches!(self, SearchError::Io { .. })
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, SearchError::Scan { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
