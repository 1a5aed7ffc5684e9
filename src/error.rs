//! Library error types.

use std::path::PathBuf;

use thiserror::Error;

/// Library result type alias
pub type Result<T> = std::result::Result<T, LyricsError>;

#[derive(Debug, Error)]
pub enum LyricsError {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// File exists but is not valid UTF-8
    #[error("File is not valid UTF-8: {path:?}")]
    Decode { path: PathBuf },

    /// Alias table could not be parsed
    #[error("Invalid alias file {path:?}: {source}")]
    AliasFile {
        source: serde_json::Error,
        path: PathBuf,
    },

    /// Performer argument matches no alias
    #[error("No performer matches '{0}'")]
    PerformerNotFound(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LyricsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
