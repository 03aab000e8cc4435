//! Error taxonomy for a single extraction run.

use thiserror::Error;

/// Errors that abort a run. None of them are retried.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Wrong command-line arguments; reported before any file access.
    #[error("{0}")]
    Usage(String),
    /// The file could not be read for parsing or does not parse as Go.
    #[error("error parsing file: {message}")]
    Parse { path: String, message: String },
    /// The file could not be re-read for line slicing.
    #[error("error reading source file {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Wrap a front-end failure.
    pub fn parse(path: &str, err: anyhow::Error) -> Self {
        ExtractError::Parse {
            path: path.to_string(),
            message: format!("{:#}", err),
        }
    }
}
