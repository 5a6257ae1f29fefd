use thiserror::Error;

/// Top-level error type for EcoSort.
///
/// Resolution itself never fails; these variants cover the ambient layers
/// around it (configuration, custom rule tables, reply templates). Subsystem
/// crates wrap `EcosortError` in their own error types so that `?` works
/// across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EcosortError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

impl From<toml::de::Error> for EcosortError {
    fn from(err: toml::de::Error) -> Self {
        EcosortError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EcosortError {
    fn from(err: toml::ser::Error) -> Self {
        EcosortError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EcosortError {
    fn from(err: serde_json::Error) -> Self {
        EcosortError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for EcoSort operations.
pub type Result<T> = std::result::Result<T, EcosortError>;
