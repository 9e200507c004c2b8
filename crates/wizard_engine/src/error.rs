//! Unified error types for wizard_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wizard_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Input Errors ===
    #[error("{message}")]
    Validation { message: String },

    // === Font Errors ===
    #[error("Failed to load font '{path}': {message}")]
    FontLoad { path: PathBuf, message: String },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for wizard_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a validation error for rejected user input
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation { message: msg.into() }
    }

    /// Create a font loading error
    pub fn font_load(path: impl Into<PathBuf>, msg: impl std::fmt::Display) -> Self {
        Self::FontLoad {
            path: path.into(),
            message: msg.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
