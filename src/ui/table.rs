use tabled::{settings::Style, Table, Tabled};
use crate::model::{Proverb, Story};

/// Cells longer than this are cut with an ellipsis.
const CELL_WIDTH: usize = 48;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct StoryRow {
    #[tabled(rename = "#")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Added")]
    created_at: String,
}

#[derive(Tabled)]
struct ProverbRow {
    #[tabled(rename = "#")]
    id: i64,
    #[tabled(rename = "Proverb")]
    proverb: String,
    #[tabled(rename = "Meaning")]
    meaning: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Region")]
    region: String,
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        render(&self.rows)
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

pub fn stories_table(stories: &[Story]) -> String {
    let rows: Vec<StoryRow> = stories
        .iter()
        .map(|s| StoryRow {
            id: s.id,
            title: clip(&s.title),
            author: cell(&s.author),
            language: cell(&s.language),
            category: cell(&s.category),
            created_at: s.created_at.clone(),
        })
        .collect();
    render(&rows)
}

pub fn proverbs_table(proverbs: &[Proverb]) -> String {
    let rows: Vec<ProverbRow> = proverbs
        .iter()
        .map(|p| ProverbRow {
            id: p.id,
            proverb: clip(&p.proverb),
            meaning: clip(p.meaning.as_deref().unwrap_or_default()),
            language: cell(&p.language),
            region: cell(&p.region),
        })
        .collect();
    render(&rows)
}

fn render<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn clip(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        return text.to_string();
    }
    let cut: String = text.chars().take(CELL_WIDTH).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_long_cell() {
        let long = "क".repeat(60);
        let clipped = clip(&long);
        assert_eq!(clipped.chars().count(), CELL_WIDTH + 3);
        assert!(clipped.ends_with("..."));
        assert_eq!(clip("short"), "short");
    }

    #[test]
    fn test_empty_tables_render_nothing() {
        assert!(stories_table(&[]).is_empty());
        assert!(TableBuilder::new().build().is_empty());
    }

    #[test]
    fn test_stories_table_has_headers() {
        let story = Story {
            id: 7,
            title: "Birbal's khichdi".to_string(),
            content: "...".to_string(),
            author: None,
            language: Some("Hindi".to_string()),
            category: Some("Wit".to_string()),
            tags: None,
            created_at: "2024-01-01 10:00:00".to_string(),
        };
        let table = stories_table(&[story]);
        assert!(table.contains("Title"));
        assert!(table.contains("Birbal's khichdi"));
        assert!(table.contains("Hindi"));
    }
}
