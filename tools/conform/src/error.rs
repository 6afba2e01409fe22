use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure failures. Unmet expectations are not errors; they are
/// failing `RuleResult`s.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to inspect {path}: {source}")]
    Probe {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("project root {} is not a directory", .0.display())]
    RootNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, CheckError>;
