//! Errors raised while reading content documents

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a single document. The loader logs these and moves on.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not valid UTF-8")]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to scan content directory: {0}")]
    Walk(#[from] walkdir::Error),
}
