pub mod document;
pub mod language;
pub mod snippet;
pub mod storage;

pub use document::Document;
pub use language::{LanguageSource, SnippetLanguage, language_for_path, resolve_language};
pub use snippet::{Category, Snippet};
pub use storage::{StorageManager, read_snippet_file};
