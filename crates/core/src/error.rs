#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested record does not exist. `key` is the id or name the
    /// caller looked up, already rendered for display.
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
