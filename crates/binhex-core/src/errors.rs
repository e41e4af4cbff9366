//! Error types for reading, converting and writing line documents
//!
//! Every failure in this crate is fatal to a run. The variants only exist so
//! the CLI can name the path and underlying cause in its diagnostic.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No input path supplied")]
    MissingInput,
    #[error("Failed to read input file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid binary literal '{0}': expected exactly 8 binary digits")]
    InvalidLiteral(String),
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConvertError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::FileWrite {
            path: path.into(),
            source,
        }
    }
}
