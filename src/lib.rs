//! blogkit: the content pipeline of a small markdown blog
//!
//! Markdown documents with a `---` fenced front-matter block are loaded
//! into [`content::Post`] records, and [`helpers`] provides the queries a
//! blog front end needs: date sorting, category filters, slug lookup,
//! reading time and display dates.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::Path;

use content::{ContentLoader, DirectorySource, Post};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory the posts are read from
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Document source over the content directory
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.content_dir)
    }

    /// Load every post in discovery order
    pub fn load_posts(&self) -> Vec<Post> {
        let source = self.source();
        ContentLoader::new(&source).load_posts()
    }

    /// Load every post, sorted by the configured order
    pub fn posts(&self) -> Vec<Post> {
        helpers::sort_by_date(&self.load_posts(), self.config.sort_order)
    }

    /// Load a single post by slug
    pub fn post(&self, slug: &str) -> Option<Post> {
        let source = self.source();
        ContentLoader::new(&source).load_post_by_slug(slug)
    }

    /// Posts in `category` (or all posts for the default category), sorted
    /// by the configured order
    pub fn listing(&self, posts: &[Post], category: Option<&str>) -> Vec<Post> {
        let selected = match category {
            Some(c) if !self.config.is_unfiltered(Some(c)) => {
                helpers::filter_by_category(posts, c)
            }
            _ => posts.to_vec(),
        };
        helpers::sort_by_date(&selected, self.config.sort_order)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, category: Option<&str>) -> Result<std::path::PathBuf> {
        commands::new::create_post(self, title, category, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Blog) {
        let tmp = TempDir::new().unwrap();
        let blogs = tmp.path().join("blogs");
        fs::create_dir_all(&blogs).unwrap();
        fs::write(
            blogs.join("old.md"),
            "---\ntitle: Old\nslug: old\ndate: 2023-12-15\ncategory: AI\n---\nOld body",
        )
        .unwrap();
        fs::write(
            blogs.join("new.md"),
            "---\ntitle: New\nslug: new\ndate: 2024-03-01\ncategory: Future of Work\n---\nNew body",
        )
        .unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        (tmp, blog)
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let (_tmp, blog) = site();
        let posts = blog.posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.route_key()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn test_listing_default_category() {
        let (_tmp, blog) = site();
        let posts = blog.load_posts();
        assert_eq!(blog.listing(&posts, Some("All")).len(), 2);
        assert_eq!(blog.listing(&posts, None).len(), 2);

        let ai = blog.listing(&posts, Some("ai"));
        assert_eq!(ai.len(), 1);
        assert_eq!(ai[0].route_key(), "old");
    }

    #[test]
    fn test_post_by_slug() {
        let (_tmp, blog) = site();
        assert_eq!(blog.post("new").unwrap().content, "New body");
        assert!(blog.post("missing").is_none());
    }

    #[test]
    fn test_config_file_overrides() {
        let (tmp, _) = site();
        fs::write(tmp.path().join("_config.yml"), "content_dir: elsewhere\n").unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert!(blog.content_dir.ends_with("elsewhere"));
        assert!(blog.load_posts().is_empty());
    }
}
