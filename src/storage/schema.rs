//! Database schema definitions

/// SQL to create the stories table
pub const CREATE_STORIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS stories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    author TEXT,
    language TEXT,
    category TEXT,
    tags TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQL to create the proverbs table
pub const CREATE_PROVERBS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS proverbs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    proverb TEXT NOT NULL,
    meaning TEXT,
    language TEXT,
    region TEXT,
    contributor TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQL to create indexes on the filter and sort columns
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_stories_language ON stories(language)",
    "CREATE INDEX IF NOT EXISTS idx_stories_category ON stories(category)",
    "CREATE INDEX IF NOT EXISTS idx_stories_created ON stories(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_proverbs_language ON proverbs(language)",
    "CREATE INDEX IF NOT EXISTS idx_proverbs_region ON proverbs(region)",
    "CREATE INDEX IF NOT EXISTS idx_proverbs_created ON proverbs(created_at)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_STORIES_TABLE, CREATE_PROVERBS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
