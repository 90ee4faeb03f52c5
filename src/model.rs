//! Domain types - stories, proverbs and the rules for creating them
//!
//! Create requests arrive as [`NewStory`] / [`NewProverb`] with every field
//! optional. Validation and defaulting happen once, here, producing a draft
//! that storage accepts. Nothing else in the crate fills in defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_REGION: &str = "Unknown";

/// Languages always offered by the languages endpoint, whatever is stored.
pub const REFERENCE_LANGUAGES: [&str; 15] = [
    "Hindi",
    "English",
    "Tamil",
    "Telugu",
    "Bengali",
    "Marathi",
    "Gujarati",
    "Punjabi",
    "Malayalam",
    "Kannada",
    "Urdu",
    "Odia",
    "Assamese",
    "Sanskrit",
    "Other",
];

/// A stored folk story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    /// UTC, `YYYY-MM-DD HH:MM:SS`, set by the database at insert
    pub created_at: String,
}

/// A stored proverb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proverb {
    pub id: i64,
    pub proverb: String,
    pub meaning: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub contributor: Option<String>,
    pub created_at: String,
}

/// Body of `POST /api/stories`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewStory {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

/// Body of `POST /api/proverbs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProverb {
    pub proverb: Option<String>,
    pub meaning: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub contributor: Option<String>,
}

/// A validated story, every column resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub language: String,
    pub category: String,
    pub tags: String,
}

/// A validated proverb, every column resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverbDraft {
    pub proverb: String,
    pub meaning: String,
    pub language: String,
    pub region: String,
    pub contributor: String,
}

impl NewStory {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn validate(self) -> Result<StoryDraft> {
        const MESSAGE: &str = "Title and content are required";

        let title = non_blank(self.title).ok_or_else(|| Error::validation("title", MESSAGE))?;
        let content =
            non_blank(self.content).ok_or_else(|| Error::validation("content", MESSAGE))?;

        Ok(StoryDraft {
            title,
            content,
            author: or_default(self.author, DEFAULT_AUTHOR),
            language: or_default(self.language, DEFAULT_LANGUAGE),
            category: or_default(self.category, DEFAULT_CATEGORY),
            tags: or_default(self.tags, ""),
        })
    }
}

impl NewProverb {
    pub fn new(proverb: impl Into<String>) -> Self {
        Self {
            proverb: Some(proverb.into()),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn validate(self) -> Result<ProverbDraft> {
        let proverb = non_blank(self.proverb)
            .ok_or_else(|| Error::validation("proverb", "Proverb text is required"))?;

        Ok(ProverbDraft {
            proverb,
            meaning: or_default(self.meaning, ""),
            language: or_default(self.language, DEFAULT_LANGUAGE),
            region: or_default(self.region, DEFAULT_REGION),
            contributor: or_default(self.contributor, DEFAULT_AUTHOR),
        })
    }
}

/// Up to two equality predicates for a list read.
///
/// Which columns `first` and `second` mean is decided by the collection being
/// queried (stories: language, category; proverbs: language, region).
/// Blank values never survive construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    first: Option<String>,
    second: Option<String>,
}

impl Filter {
    pub fn new(first: Option<String>, second: Option<String>) -> Self {
        Self {
            first: blank_to_none(first),
            second: blank_to_none(second),
        }
    }

    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

/// Merge stored language values with the reference set: blanks dropped,
/// duplicates removed, sorted ascending.
pub fn merge_languages<I>(stored: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut all: BTreeSet<String> = stored
        .into_iter()
        .filter(|lang| !lang.trim().is_empty())
        .collect();
    all.extend(REFERENCE_LANGUAGES.iter().map(|s| s.to_string()));
    all.into_iter().collect()
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_defaults() {
        let draft = NewStory::new("Panchatantra Tale", "Once there was a fox...")
            .validate()
            .unwrap();

        assert_eq!(draft.author, "Anonymous");
        assert_eq!(draft.language, "English");
        assert_eq!(draft.category, "General");
        assert_eq!(draft.tags, "");
    }

    #[test]
    fn test_story_keeps_supplied_fields() {
        let draft = NewStory::new("Tenali Raman", "The king asked...")
            .with_author("Meera")
            .with_language("Telugu")
            .with_category("Wit")
            .validate()
            .unwrap();

        assert_eq!(draft.author, "Meera");
        assert_eq!(draft.language, "Telugu");
        assert_eq!(draft.category, "Wit");
    }

    #[test]
    fn test_blank_optional_fields_take_defaults() {
        let draft = NewStory::new("t", "c").with_author("   ").validate().unwrap();
        assert_eq!(draft.author, "Anonymous");
    }

    #[test]
    fn test_story_requires_title_and_content() {
        let err = NewStory::new("", "content").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "title", .. }));
        assert_eq!(err.to_string(), "Title and content are required");

        let err = NewStory::new("title", "  \n ").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "content", .. }));

        let err = NewStory::default().validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_proverb_defaults_and_validation() {
        let draft = NewProverb::new("Yatha raja tatha praja").validate().unwrap();
        assert_eq!(draft.meaning, "");
        assert_eq!(draft.language, "English");
        assert_eq!(draft.region, "Unknown");
        assert_eq!(draft.contributor, "Anonymous");

        let err = NewProverb::new(" ").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "proverb", .. }));
        assert_eq!(err.to_string(), "Proverb text is required");
    }

    #[test]
    fn test_new_story_from_partial_json() {
        let req: NewStory = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("x"));
        assert!(req.content.is_none());
    }

    #[test]
    fn test_filter_drops_blank_values() {
        let filter = Filter::new(Some(String::new()), Some("  ".to_string()));
        assert!(filter.is_empty());

        let filter = Filter::new(Some("Tamil".to_string()), Some("".to_string()));
        assert_eq!(filter.first(), Some("Tamil"));
        assert_eq!(filter.second(), None);
    }

    #[test]
    fn test_filter_keeps_value_verbatim() {
        let filter = Filter::new(None, Some(" Chennai".to_string()));
        assert_eq!(filter.second(), Some(" Chennai"));
    }

    #[test]
    fn test_merge_languages_without_stored_values() {
        let langs = merge_languages(Vec::new());
        assert_eq!(langs.len(), 15);
        assert_eq!(langs.first().map(String::as_str), Some("Assamese"));
        assert_eq!(langs.last().map(String::as_str), Some("Urdu"));
        assert!(langs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_merge_languages_dedupes_and_drops_blanks() {
        let stored = vec![
            "Tamil".to_string(),
            "Konkani".to_string(),
            "".to_string(),
            "   ".to_string(),
        ];
        let langs = merge_languages(stored);
        assert_eq!(langs.len(), 16);
        assert_eq!(langs.iter().filter(|l| *l == "Tamil").count(), 1);
        assert!(langs.contains(&"Konkani".to_string()));
    }
}
