//! Error types for registry loading.

use thiserror::Error;

/// Errors raised while loading or building a mode registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("mode '{mode}' does not list any collections")]
    EmptyMode { mode: String },

    #[error("mode '{mode}' is defined more than once")]
    DuplicateMode { mode: String },
}
