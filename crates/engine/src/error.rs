use std::path::{Path, PathBuf};
use thiserror::Error;

/// A matched file that could not be turned into text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl ReadError {
    /// The offending path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
