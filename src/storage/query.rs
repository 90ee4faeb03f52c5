//! List query construction
//!
//! Every list read is one of four prepared statements per collection, picked
//! by which filter columns are active. Filter values are always bound as
//! parameters. Results are newest first; rows sharing a timestamp come back
//! in reverse insertion order.

use crate::model::Filter;

/// Expands to the four list statements of a collection, indexed by
/// [`FilterShape::index`].
macro_rules! list_statements {
    ($table:literal, $columns:literal, $first:literal, $second:literal) => {
        [
            concat!(
                "SELECT ", $columns, " FROM ", $table,
                " ORDER BY created_at DESC, id DESC"
            ),
            concat!(
                "SELECT ", $columns, " FROM ", $table,
                " WHERE ", $first, " = ?1",
                " ORDER BY created_at DESC, id DESC"
            ),
            concat!(
                "SELECT ", $columns, " FROM ", $table,
                " WHERE ", $second, " = ?1",
                " ORDER BY created_at DESC, id DESC"
            ),
            concat!(
                "SELECT ", $columns, " FROM ", $table,
                " WHERE ", $first, " = ?1 AND ", $second, " = ?2",
                " ORDER BY created_at DESC, id DESC"
            ),
        ]
    };
}

/// Which of a collection's two filter columns take part in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterShape {
    Unfiltered,
    FirstOnly,
    SecondOnly,
    Both,
}

impl FilterShape {
    pub fn of(filter: &Filter) -> Self {
        match (filter.first(), filter.second()) {
            (None, None) => FilterShape::Unfiltered,
            (Some(_), None) => FilterShape::FirstOnly,
            (None, Some(_)) => FilterShape::SecondOnly,
            (Some(_), Some(_)) => FilterShape::Both,
        }
    }

    fn index(self) -> usize {
        match self {
            FilterShape::Unfiltered => 0,
            FilterShape::FirstOnly => 1,
            FilterShape::SecondOnly => 2,
            FilterShape::Both => 3,
        }
    }
}

/// A listable table and its two filterable columns.
#[derive(Debug)]
pub struct Collection {
    pub table: &'static str,
    pub first_column: &'static str,
    pub second_column: &'static str,
    statements: [&'static str; 4],
}

pub const STORIES: Collection = Collection {
    table: "stories",
    first_column: "language",
    second_column: "category",
    statements: list_statements!(
        "stories",
        "id, title, content, author, language, category, tags, created_at",
        "language",
        "category"
    ),
};

pub const PROVERBS: Collection = Collection {
    table: "proverbs",
    first_column: "language",
    second_column: "region",
    statements: list_statements!(
        "proverbs",
        "id, proverb, meaning, language, region, contributor, created_at",
        "language",
        "region"
    ),
};

/// A ready-to-run list read: static SQL plus its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<'a> {
    pub shape: FilterShape,
    /// Filtered columns, in parameter order
    pub columns: Vec<&'static str>,
    pub sql: &'static str,
    pub params: Vec<&'a str>,
}

impl Collection {
    pub fn list_query<'a>(&self, filter: &'a Filter) -> ListQuery<'a> {
        let shape = FilterShape::of(filter);
        let params = filter.first().into_iter().chain(filter.second()).collect();
        let columns = match shape {
            FilterShape::Unfiltered => vec![],
            FilterShape::FirstOnly => vec![self.first_column],
            FilterShape::SecondOnly => vec![self.second_column],
            FilterShape::Both => vec![self.first_column, self.second_column],
        };

        ListQuery {
            shape,
            columns,
            sql: self.statements[shape.index()],
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(first: &str, second: &str) -> Filter {
        Filter::new(Some(first.to_string()), Some(second.to_string()))
    }

    #[test]
    fn test_unfiltered_query() {
        let f = Filter::unfiltered();
        let q = STORIES.list_query(&f);
        assert_eq!(q.shape, FilterShape::Unfiltered);
        assert!(q.params.is_empty());
        assert!(q.columns.is_empty());
        assert!(!q.sql.contains("WHERE"));
        assert!(q.sql.ends_with("ORDER BY created_at DESC, id DESC"));
    }

    #[test]
    fn test_single_filter_binds_one_param() {
        let f = filter("Hindi", "");
        let q = STORIES.list_query(&f);
        assert_eq!(q.shape, FilterShape::FirstOnly);
        assert!(q.sql.contains("WHERE language = ?1 ORDER BY"));
        assert_eq!(q.params, vec!["Hindi"]);
        assert_eq!(q.columns, vec!["language"]);

        let f = filter("", "Folk");
        let q = STORIES.list_query(&f);
        assert_eq!(q.shape, FilterShape::SecondOnly);
        assert!(q.sql.contains("WHERE category = ?1 ORDER BY"));
        assert_eq!(q.params, vec!["Folk"]);
        assert_eq!(q.columns, vec!["category"]);
    }

    #[test]
    fn test_both_filters_are_anded() {
        let f = filter("Tamil", "Chennai");
        let q = PROVERBS.list_query(&f);
        assert_eq!(q.shape, FilterShape::Both);
        assert!(q.sql.contains("FROM proverbs WHERE language = ?1 AND region = ?2"));
        assert_eq!(q.params, vec!["Tamil", "Chennai"]);
        assert_eq!(q.columns, vec!["language", "region"]);
    }

    #[test]
    fn test_filter_values_never_reach_sql_text() {
        let f = filter("x' OR '1'='1", "");
        let q = PROVERBS.list_query(&f);
        assert!(!q.sql.contains("OR '1'"));
        assert_eq!(q.params.len(), 1);
    }

    #[test]
    fn test_collections_select_their_columns() {
        let f = Filter::unfiltered();
        assert!(STORIES.list_query(&f).sql.starts_with("SELECT id, title, content"));
        assert!(PROVERBS.list_query(&f).sql.starts_with("SELECT id, proverb, meaning"));
        assert_eq!(PROVERBS.second_column, "region");
    }
}
