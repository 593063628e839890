//! Content loader - turns raw documents into posts

use std::path::Path;

use super::{DocumentSource, FrontMatter, Post, RawDocument};

/// Loads posts from a document source
pub struct ContentLoader<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    /// Load all posts in discovery order.
    ///
    /// Every call re-reads and re-parses the whole source. A document that
    /// fails is logged and skipped; the rest are still returned.
    pub fn load_posts(&self) -> Vec<Post> {
        let mut posts = Vec::new();

        for document in self.source.documents() {
            match document.map(|doc| load_post(&doc)) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::error!("Failed to load post: {}", e);
                }
            }
        }

        tracing::debug!("Loaded {} posts", posts.len());
        posts
    }

    /// Load every post and return the first whose slug matches exactly
    pub fn load_post_by_slug(&self, slug: &str) -> Option<Post> {
        if slug.is_empty() {
            return None;
        }
        self.load_posts()
            .into_iter()
            .find(|post| post.slug.as_deref() == Some(slug))
    }
}

/// Load a single post from a document.
/// A name without a usable stem gives an empty `filename`; the post is kept.
fn load_post(doc: &RawDocument) -> Post {
    let filename = Path::new(&doc.name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let (fm, body) = FrontMatter::parse(&doc.text);
    Post::from_parts(fm, body, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentError, MemorySource};
    use std::path::PathBuf;

    #[test]
    fn test_load_posts_in_discovery_order() {
        let source = MemorySource::new()
            .with("blogs/zeta.md", "---\ntitle: Zeta\nslug: zeta\n---\nZ")
            .with("blogs/alpha.md", "---\ntitle: Alpha\nslug: alpha\n---\nA");

        let posts = ContentLoader::new(&source).load_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.route_key()).collect();
        assert_eq!(slugs, vec!["zeta", "alpha"]);
        assert_eq!(posts[0].filename, "zeta");
        assert_eq!(posts[1].content, "A");
    }

    #[test]
    fn test_failing_document_is_skipped() {
        let source = || -> Vec<Result<RawDocument, ContentError>> {
            vec![
                Ok(RawDocument::new("one.md", "---\nslug: one\n---\n1")),
                Err(ContentError::Io {
                    path: PathBuf::from("broken.md"),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
                }),
                Ok(RawDocument::new("two.md", "---\nslug: two\n---\n2")),
            ]
        };

        let posts = ContentLoader::new(&source).load_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.route_key()).collect();
        assert_eq!(slugs, vec!["one", "two"]);
    }

    #[test]
    fn test_nameless_document_is_kept() {
        let source = MemorySource::new()
            .with("", "---\nslug: nameless\n---\nbody")
            .with("blogs/", "---\nslug: dir-like\n---\nbody");

        let posts = ContentLoader::new(&source).load_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug.as_deref(), Some("nameless"));
        assert_eq!(posts[0].filename, "");
        assert_eq!(posts[1].slug.as_deref(), Some("dir-like"));
    }

    #[test]
    fn test_reload_is_idempotent() {
        let source = MemorySource::new().with("a.md", "---\nslug: a\n---\nbody");
        let loader = ContentLoader::new(&source);
        assert_eq!(loader.load_posts(), loader.load_posts());
    }

    #[test]
    fn test_duplicate_slugs_are_both_listed() {
        let source = MemorySource::new()
            .with("first.md", "---\nslug: same\n---\nfirst")
            .with("second.md", "---\nslug: same\n---\nsecond");
        let loader = ContentLoader::new(&source);

        assert_eq!(loader.load_posts().len(), 2);
        let found = loader.load_post_by_slug("same").unwrap();
        assert_eq!(found.content, "first");
    }

    #[test]
    fn test_load_post_by_slug_missing() {
        let source = MemorySource::new().with("a.md", "---\nslug: a\n---\n");
        let loader = ContentLoader::new(&source);
        assert!(loader.load_post_by_slug("b").is_none());
        assert!(loader.load_post_by_slug("").is_none());
    }
}
