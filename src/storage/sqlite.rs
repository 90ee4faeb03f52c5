//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, params_from_iter};
use crate::Result;
use crate::model::{self, Filter, Proverb, ProverbDraft, Story, StoryDraft};
use super::query::{Collection, PROVERBS, STORIES};
use super::schema;

/// SQLite-backed storage for stories and proverbs
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Story Operations ==========

    /// Append a story. Id and timestamp are assigned by the database.
    pub fn insert_story(&self, story: &StoryDraft) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO stories (title, content, author, language, category, tags)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                story.title,
                story.content,
                story.author,
                story.language,
                story.category,
                story.tags,
            ],
        )?;
        Ok(())
    }

    /// List stories, newest first. `filter` is (language, category).
    pub fn list_stories(&self, filter: &Filter) -> Result<Vec<Story>> {
        self.list(&STORIES, filter, Self::row_to_story)
    }

    pub fn count_stories(&self) -> Result<usize> {
        self.count(&STORIES)
    }

    fn row_to_story(row: &rusqlite::Row) -> rusqlite::Result<Story> {
        Ok(Story {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            author: row.get(3)?,
            language: row.get(4)?,
            category: row.get(5)?,
            tags: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    // ========== Proverb Operations ==========

    /// Append a proverb. Id and timestamp are assigned by the database.
    pub fn insert_proverb(&self, proverb: &ProverbDraft) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO proverbs (proverb, meaning, language, region, contributor)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                proverb.proverb,
                proverb.meaning,
                proverb.language,
                proverb.region,
                proverb.contributor,
            ],
        )?;
        Ok(())
    }

    /// List proverbs, newest first. `filter` is (language, region).
    pub fn list_proverbs(&self, filter: &Filter) -> Result<Vec<Proverb>> {
        self.list(&PROVERBS, filter, Self::row_to_proverb)
    }

    pub fn count_proverbs(&self) -> Result<usize> {
        self.count(&PROVERBS)
    }

    fn row_to_proverb(row: &rusqlite::Row) -> rusqlite::Result<Proverb> {
        Ok(Proverb {
            id: row.get(0)?,
            proverb: row.get(1)?,
            meaning: row.get(2)?,
            language: row.get(3)?,
            region: row.get(4)?,
            contributor: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    // ========== Shared ==========

    /// Stored languages across both collections merged with the reference set.
    pub fn languages(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT language FROM stories UNION SELECT DISTINCT language FROM proverbs"
        )?;

        let stored = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(model::merge_languages(stored.into_iter().flatten()))
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            stories: self.count_stories()?,
            proverbs: self.count_proverbs()?,
            languages: self.languages()?.len(),
        })
    }

    fn list<T>(
        &self,
        collection: &Collection,
        filter: &Filter,
        map_row: fn(&rusqlite::Row) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let query = collection.list_query(filter);
        tracing::debug!(table = collection.table, columns = ?query.columns, "list query");

        let mut stmt = self.conn.prepare_cached(query.sql)?;
        let rows = stmt
            .query_map(params_from_iter(query.params), map_row)?
            .collect::<rusqlite::Result<Vec<T>>>()?;

        Ok(rows)
    }

    fn count(&self, collection: &Collection) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub stories: usize,
    pub proverbs: usize,
    pub languages: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Stories: {}", self.stories)?;
        writeln!(f, "  Proverbs: {}", self.proverbs)?;
        writeln!(f, "  Languages: {}", self.languages)
    }
}
