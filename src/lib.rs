//! # Lokvani - folk stories and proverbs across Indian languages
//!
//! A small crowd-sourcing service. Lokvani provides:
//! - SQLite-backed append-only storage for stories and proverbs
//! - A query builder for the filtered, newest-first list reads
//! - A JSON REST API (axum) plus static serving of the browser frontend
//! - A CLI to serve, inspect and list the collections

pub mod model;
pub mod storage;
pub mod server;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use model::{Filter, NewProverb, NewStory, Proverb, Story};
pub use storage::SqliteStore;

/// Result type alias for Lokvani operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Lokvani operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was missing or blank. User-correctable.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The request body could not be read as the expected JSON shape.
    #[error("{0}")]
    BadRequest(String),

    /// Rendered bare so HTTP clients see the database's own message.
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
