use thiserror::Error;

/// Engine-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Represents a missing or empty prompt where one is required.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Represents a platform id that is not present in the catalog.
    /// Callers are expected to resolve platforms before invoking the enhancer.
    #[error("Unknown platform: {0}")]
    InvalidPlatform(String),

    /// Represents request-option validation errors (out-of-range counts).
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
