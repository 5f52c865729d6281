/// Domain-level error type shared across the workspace.
///
/// Validation failures carry the human-readable reason that ends up in the
/// HTTP response body, naming the field or lookup that failed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request payload failed validation or a name lookup found no row.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure. The message is logged, not exposed.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure with a formatted reason.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
