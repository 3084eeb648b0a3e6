//! TypeCard CLI Library
//!
//! This crate provides the command-line interface for TypeCard, a scalar
//! type reference card: kinds, default values, literal spellings, and
//! storage classes, rendered as text tables or JSON.

pub mod cli;
pub mod commands;
pub mod diagnostics;

// Re-export core types for convenience
pub use typecard_core::*;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Card error: {0}")]
        Card(#[from] typecard_core::error::Error),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("Serialization error: {0}")]
        Serialization(#[from] serde_json::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
