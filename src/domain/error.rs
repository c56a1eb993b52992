//! Domain error types.

use crate::domain::universe::UniverseError;

/// Top-level error type for leofi.
#[derive(Debug, thiserror::Error)]
pub enum LeofiError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("market data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Symbols(#[from] UniverseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LeofiError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LeofiError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<&LeofiError> for std::process::ExitCode {
    fn from(err: &LeofiError) -> Self {
        let code: u8 = match err {
            LeofiError::Io(_) | LeofiError::Json(_) => 1,
            LeofiError::ConfigParse { .. }
            | LeofiError::ConfigInvalid { .. } => 2,
            LeofiError::InvalidInput { .. } | LeofiError::Symbols(_) => 3,
            LeofiError::Data { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
