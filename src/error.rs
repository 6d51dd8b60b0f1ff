use thiserror::Error;

/// Errors that can occur while loading or transforming a recipe
#[derive(Error, Debug)]
pub enum TransformError {
    /// Recipe input did not have the expected shape
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// An option value was outside its accepted range
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A static lookup table violates one of its invariants
    #[error("Invalid data table: {0}")]
    InvalidTable(String),

    /// Failed to compile a term pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
