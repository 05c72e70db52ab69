use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConjugationError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is neither UTF-8 nor Shift-JIS (detector guessed {guess})", path.display())]
    Encoding { path: PathBuf, guess: String },

    #[error("invalid CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("{} does not contain a readable conjugationData array: {reason}", path.display())]
    ModuleParse { path: PathBuf, reason: String },

    #[error("{} was modified by another process while it was being updated", path.display())]
    ConcurrentModification { path: PathBuf },

    #[error("record rejected: {0}")]
    Rejected(String),

    #[error("input aborted before the record was complete")]
    Aborted,

    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ConjugationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConjugationError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConjugationError>;
