use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::models::{Category, Document};

/// Reads a snippet source file as UTF-8 text
pub fn read_snippet_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ConvertError::NotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ConvertError::from_input_io(path, source))
}

/// Storage Manager for the per-language JSON documents
#[derive(Debug, Clone)]
pub struct StorageManager {
    output_dir: PathBuf,
    indent: usize,
}

impl StorageManager {
    pub fn new(output_dir: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            indent,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(&config.output_dir, config.indent)
    }

    /// Path of the document for `language`, e.g. `<output_dir>/python.json`
    pub fn document_path(&self, language: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", language))
    }

    /// Like `document_path`, but refuses names that would leave the output directory
    fn checked_path(&self, language: &str) -> Result<PathBuf> {
        if language.is_empty()
            || language == "."
            || language == ".."
            || language.chars().any(std::path::is_separator)
        {
            return Err(ConvertError::InvalidLanguage {
                name: language.to_string(),
            });
        }
        Ok(self.document_path(language))
    }

    /// Loads the document for `language`; a missing file yields an empty document
    pub fn load_document(&self, language: &str) -> Result<Document> {
        let path = self.checked_path(language)?;

        if !path.is_file() {
            debug!(path = %path.display(), "no existing document");
            return Ok(Document::new());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConvertError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConvertError::CorruptState { path, source })
    }

    /// Overwrites the document for `language`
    pub fn save_document(&self, language: &str, document: &Document) -> Result<PathBuf> {
        let path = self.checked_path(language)?;
        let content = self.render(document)?;

        fs::write(&path, content).map_err(|source| ConvertError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            categories = document.categories.len(),
            snippets = document.snippet_count(),
            "document written"
        );
        Ok(path)
    }

    /// Loads the document for `language`, merges `category` into it and writes it back
    pub fn save_category(&self, category: Category, language: &str) -> Result<Document> {
        let document = self.merged_document(category, language)?;
        self.save_document(language, &document)?;
        Ok(document)
    }

    /// The document `save_category` would write, without touching the disk
    pub fn merged_document(&self, category: Category, language: &str) -> Result<Document> {
        let mut document = self.load_document(language)?;
        document.merge_category(category);
        Ok(document)
    }

    /// Pretty JSON with the configured indentation width
    pub fn render(&self, document: &Document) -> Result<String> {
        let indent = " ".repeat(self.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

        document
            .serialize(&mut serializer)
            .map_err(ConvertError::Serialize)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snippet;

    fn math() -> Category {
        Category {
            category_name: "Math".to_string(),
            snippets: vec![Snippet {
                title: "Add Two Numbers".to_string(),
                description: "Returns the sum of two integers".to_string(),
                code: vec!["def add(a, b):".to_string(), "    return a + b".to_string()],
                tags: vec!["math".to_string(), "arithmetic".to_string()],
                author: "Jane".to_string(),
            }],
        }
    }

    #[test]
    fn reading_missing_or_directory_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let missing = read_snippet_file(&dir.path().join("add.py")).unwrap_err();
        assert!(matches!(missing, ConvertError::NotFound { .. }));

        let directory = read_snippet_file(dir.path()).unwrap_err();
        assert!(matches!(directory, ConvertError::NotFound { .. }));
    }

    #[test]
    fn document_path_is_named_after_language() {
        let storage = StorageManager::new("out", 2);
        assert_eq!(storage.document_path("python"), Path::new("out/python.json"));
    }

    #[test]
    fn missing_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path(), 2);
        assert_eq!(storage.load_document("python").unwrap(), Document::new());
    }

    #[test]
    fn render_keeps_key_order_and_indent() {
        let storage = StorageManager::new(".", 2);
        let rendered = storage.render(&Document::from(math())).unwrap();

        let keys = [
            "\"categoryName\"",
            "\"snippets\"",
            "\"title\"",
            "\"description\"",
            "\"code\"",
            "\"tags\"",
            "\"author\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| rendered.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(rendered.starts_with("[\n  {\n    \"categoryName\": \"Math\""));
    }

    #[test]
    fn render_honours_indent_width() {
        let storage = StorageManager::new(".", 4);
        let rendered = storage.render(&Document::from(math())).unwrap();
        assert!(rendered.starts_with("[\n    {\n        \"categoryName\""));
    }

    #[test]
    fn corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path(), 2);
        fs::write(
            storage.document_path("python"),
            r#"[{"categoryName": "Math", "snippets": [{"title": 3}]}]"#,
        )
        .unwrap();

        let err = storage.load_document("python").unwrap_err();
        assert!(matches!(err, ConvertError::CorruptState { .. }));
    }

    #[test]
    fn save_category_creates_then_merges() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path(), 2);

        storage.save_category(math(), "python").unwrap();
        let document = storage.save_category(math(), "python").unwrap();

        assert_eq!(document.categories.len(), 1);
        assert_eq!(document.categories[0].snippets.len(), 2);
        assert_eq!(storage.load_document("python").unwrap(), document);
    }

    #[test]
    fn language_with_path_separator_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        let storage = StorageManager::new(&out, 2);

        for name in ["../escape", "nested/python", "", ".."] {
            let err = storage.save_category(math(), name).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidLanguage { .. }), "{name}");
        }
        assert!(!dir.path().join("escape.json").exists());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn merged_document_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path(), 2);

        let document = storage.merged_document(math(), "python").unwrap();

        assert_eq!(document.snippet_count(), 1);
        assert!(!storage.document_path("python").exists());
    }
}
