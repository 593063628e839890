//! Document sources - where raw markdown documents come from

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ContentError;

/// An unparsed document: a name to derive the file name from, and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub name: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Supplies the documents the loader parses.
///
/// Each entry is produced independently so that one unreadable document
/// does not hide the others.
pub trait DocumentSource {
    fn documents(&self) -> Vec<Result<RawDocument, ContentError>>;
}

impl<F> DocumentSource for F
where
    F: Fn() -> Vec<Result<RawDocument, ContentError>>,
{
    fn documents(&self) -> Vec<Result<RawDocument, ContentError>> {
        self()
    }
}

/// Markdown files directly inside a directory, ordered by file name
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Vec<Result<RawDocument, ContentError>> {
        if !self.dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.dir);
            return Vec::new();
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    documents.push(Err(ContentError::from(e)));
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                documents.push(read_document(path));
            }
        }

        documents
    }
}

fn read_document(path: &Path) -> Result<RawDocument, ContentError> {
    let bytes = fs::read(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ContentError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RawDocument::new(path.to_string_lossy(), text))
}

/// Documents held in memory, e.g. embedded with `include_str!`
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<RawDocument>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push(RawDocument::new(name, text));
        self
    }
}

impl FromIterator<(String, String)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(name, text)| RawDocument::new(name, text))
                .collect(),
        }
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> Vec<Result<RawDocument, ContentError>> {
        self.documents.iter().cloned().map(Ok).collect()
    }
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
