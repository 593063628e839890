//! Content module - documents, front-matter parsing and posts

mod error;
mod frontmatter;
pub mod loader;
mod post;
mod source;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterValue};
pub use loader::ContentLoader;
pub use post::Post;
pub use source::{is_markdown_file, DirectorySource, DocumentSource, MemorySource, RawDocument};
