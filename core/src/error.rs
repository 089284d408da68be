use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parameter '{name}' not found")]
    UnknownParameter { name: String },

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Verification failed for {what}: expected {expected}, got {actual}")]
    VerificationFailed {
        what: &'static str,
        expected: f64,
        actual: f64,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RoiResult<T> = Result<T, RoiError>;
