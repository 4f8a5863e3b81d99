use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("option path `{path}` cannot descend through non-container value at `{segment}`")]
    PathCollision { path: String, segment: String },

    #[error("invalid option path: {0:?}")]
    InvalidPath(String),

    #[error("type mismatch for `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid native payload: {0}")]
    InvalidPayload(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Raised by application event handlers; passed through dispatch untouched.
    #[error("event handler failed: {0}")]
    Handler(String),
}
