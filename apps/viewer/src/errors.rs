use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type. The query engine itself never fails; these cover
/// loading the résumé asset and the session store.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate experience id: {0}")]
    DuplicateExperienceId(String),

    #[error("Session store error: {0}")]
    Session(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, mirrored in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io { .. } => "IO_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::DuplicateExperienceId(_) => "DUPLICATE_EXPERIENCE_ID",
            AppError::Session(_) => "SESSION_ERROR",
        }
    }
}
