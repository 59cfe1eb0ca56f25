use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting a bibliography
#[derive(Error, Debug)]
pub enum AuxBibError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Search path {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Journal name table not found at {0:?}")]
    JournalNamesNotFound(PathBuf),

    #[error("Invalid journal name table {path:?}: {reason}")]
    InvalidJournalNames { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No journal name table given and neither AUXBIB_JOURNAL_NAMES nor HOME is set")]
    NoJournalNamesPath,
}

impl AuxBibError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuxBibError::Io {
            path: path.into(),
            source,
        }
    }
}
