//! Error types for the rolodir ecosystem.

use thiserror::Error;

/// Errors that can occur in rolodir operations.
///
/// Missing optional contact fields are never errors: absence is the
/// expected steady state and mapping simply skips the field group.
#[derive(Error, Debug)]
pub enum RolodirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Save failed: {0}")]
    Save(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for rolodir operations.
pub type RolodirResult<T> = Result<T, RolodirError>;
