//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::helpers::{SortOrder, DEFAULT_WORDS_PER_MINUTE};

/// Blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub title: String,
    pub author: String,

    /// Directory holding the markdown posts, relative to the site root
    pub content_dir: String,

    // Listing
    pub per_page: usize,
    /// Category label that means "no filter"
    pub default_category: String,
    pub sort_order: SortOrder,
    pub words_per_minute: u32,

    // Writing
    pub new_post_name: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Writings".to_string(),
            author: String::new(),

            content_dir: "blogs".to_string(),

            per_page: 9,
            default_category: "All".to_string(),
            sort_order: SortOrder::Desc,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,

            new_post_name: ":title.md".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether `category` selects every post
    pub fn is_unfiltered(&self, category: Option<&str>) -> bool {
        match category {
            None => true,
            Some(c) => c.is_empty() || c.eq_ignore_ascii_case(&self.default_category),
        }
    }
}
