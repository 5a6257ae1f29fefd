//! Error types for the action layer.

use ecosort_core::error::EcosortError;

/// Errors from building actions.
///
/// Resolution outcomes are never errors; this covers setup only.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Action setup failed: {0}")]
    Setup(#[from] EcosortError),
}
