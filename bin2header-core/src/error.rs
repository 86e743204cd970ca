use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single header generation run.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The input path is absent or not a regular file. Nothing was written.
    #[error("'{}' does not exist.", path.display())]
    MissingInput { path: PathBuf },

    /// The input exists but its bytes could not be read.
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening, writing or flushing the output failed; the file may be truncated.
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HeaderError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, HeaderError::MissingInput { .. })
    }
}
