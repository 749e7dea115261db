use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

use crate::{corpus::Document, error::Result};

pub const DEFAULT_EXTENSION: &str = "txt";

/// Reads a directory of plain-text files into [`Document`]s.
///
/// Only the top-level directory is read unless `with_recursive(true)` is set.
/// Hidden entries (names starting with `.`) are skipped. Files are visited in
/// file-name order and identified by their path relative to the root.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    path: PathBuf,
    extension: Option<String>,
    recursive: bool,
}

impl CorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            recursive: false,
        }
    }

    /// `None` accepts files with any extension.
    #[must_use]
    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn load(&self) -> Result<Vec<Document>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        {
            let entry = entry?;

            if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
                continue;
            }

            let text = fs::read_to_string(entry.path())?;
            let id = entry
                .path()
                .strip_prefix(&self.path)
                .unwrap_or_else(|_| entry.path())
                .to_string_lossy()
                .to_string();

            tracing::debug!(id, bytes = text.len(), "loaded document");

            documents.push(Document::new(id, text));
        }

        tracing::info!(
            path = %self.path.display(),
            documents = documents.len(),
            "corpus loaded"
        );

        Ok(documents)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        self.extension.as_deref().map_or(true, |wanted| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == wanted)
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn loads_text_files_in_name_order() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("b.txt"), "second").expect("Failed to write file");
        fs::write(dir.path().join("a.txt"), "first").expect("Failed to write file");
        fs::write(dir.path().join("notes.md"), "ignored").expect("Failed to write file");

        let documents = CorpusLoader::new(dir.path()).load().expect("Failed to load");

        assert_eq!(
            documents,
            vec![
                Document::new("a.txt".to_string(), "first".to_string()),
                Document::new("b.txt".to_string(), "second".to_string()),
            ]
        );
    }

    #[test]
    fn skips_subdirectories_unless_recursive() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("Failed to create dir");
        fs::write(dir.path().join("top.txt"), "top").expect("Failed to write file");
        fs::write(sub.join("nested.txt"), "nested").expect("Failed to write file");

        let flat = CorpusLoader::new(dir.path()).load().expect("Failed to load");
        let deep = CorpusLoader::new(dir.path())
            .with_recursive(true)
            .load()
            .expect("Failed to load");

        assert_eq!(flat.len(), 1);
        assert_eq!(deep.len(), 2);
        assert!(deep
            .iter()
            .any(|doc| Path::new(&doc.id) == Path::new("sub").join("nested.txt")));
    }

    #[test]
    fn any_extension_when_unset() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.txt"), "one").expect("Failed to write file");
        fs::write(dir.path().join("b"), "two").expect("Failed to write file");

        let documents = CorpusLoader::new(dir.path())
            .with_extension(None)
            .load()
            .expect("Failed to load");

        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn skips_hidden_files_and_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let hidden = dir.path().join(".cache");
        fs::create_dir(&hidden).expect("Failed to create dir");
        fs::write(dir.path().join("kept.txt"), "kept").expect("Failed to write file");
        fs::write(dir.path().join(".draft.txt"), "draft").expect("Failed to write file");
        fs::write(hidden.join("cached.txt"), "cached").expect("Failed to write file");

        let documents = CorpusLoader::new(dir.path())
            .with_recursive(true)
            .load()
            .expect("Failed to load");

        assert_eq!(
            documents,
            vec![Document::new("kept.txt".to_string(), "kept".to_string())]
        );
    }

    #[test]
    fn empty_directory_is_empty_corpus() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let documents = CorpusLoader::new(dir.path()).load().expect("Failed to load");

        assert!(documents.is_empty());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = CorpusLoader::new(dir.path().join("missing")).load();

        assert!(matches!(result, Err(Error::WalkDir(_))));
    }
}
