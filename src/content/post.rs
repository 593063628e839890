//! Post model

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

use super::frontmatter::{FrontMatter, FrontMatterValue};
use crate::helpers;

/// A blog post built from one markdown document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Post {
    /// Lookup and routing key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as written in the front-matter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Short text for list views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Reading time declared by the author, e.g. "4 min read"
    #[serde(rename = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Raw markdown body
    pub content: String,

    /// Source file name without extension
    pub filename: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, FrontMatterValue>,
}

impl Post {
    /// Build a post from parsed front-matter and its body.
    /// Known keys move into typed fields, everything else lands in `extra`.
    pub fn from_parts(mut fm: FrontMatter, content: &str, filename: &str) -> Self {
        let mut text = |key: &str| fm.take(key).map(FrontMatterValue::into_text);

        let slug = text("slug");
        let title = text("title");
        let date = text("date");
        let category = text("category");
        let summary = text("summary");
        let read_time = text("readTime");

        // The body and file name win over metadata keys of the same name
        for reserved in ["content", "filename"] {
            if fm.take(reserved).is_some() {
                tracing::debug!("Ignoring front-matter key `{}` in {}", reserved, filename);
            }
        }

        Self {
            slug,
            title,
            date,
            category,
            summary,
            read_time,
            content: content.to_string(),
            filename: filename.to_string(),
            extra: fm.into_fields(),
        }
    }

    /// Title for display, falling back to the file name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.filename)
    }

    /// Slug used for routing, falling back to the file name
    pub fn route_key(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.filename)
    }

    /// Parse the date string into a NaiveDateTime
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(helpers::parse_date)
    }

    /// Date formatted for display ("Jan 5, 2024")
    pub fn display_date(&self) -> String {
        self.date
            .as_deref()
            .map(helpers::format_date_display)
            .unwrap_or_default()
    }

    /// Declared reading time, or one computed from the body
    pub fn reading_time(&self, words_per_minute: u32) -> String {
        match &self.read_time {
            Some(declared) if !declared.trim().is_empty() => declared.clone(),
            _ => helpers::reading_time_with_rate(&self.content, words_per_minute),
        }
    }
}
