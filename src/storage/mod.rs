//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with two append-only tables:
//! - stories(id, title, content, author, language, category, tags, created_at)
//! - proverbs(id, proverb, meaning, language, region, contributor, created_at)

pub mod query;
pub mod schema;
pub mod sqlite;

pub use query::{Collection, FilterShape, ListQuery, PROVERBS, STORIES};
pub use sqlite::{DbStats, SqliteStore};
