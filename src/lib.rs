//! snipconv - Snippet to JSON converter
//!
//! Turns an annotated snippet file into an entry of a per-language JSON
//! document, grouping snippets by category:
//!
//! ```text
//! Math                          -> categoryName
//! Add Two Numbers               -> title
//! Returns the sum of two ints   -> description
//! math, arithmetic              -> tags
//! Jane                          -> author
//!
//! def add(a, b):                -> code
//!     return a + b
//! ```
//!
//! Metadata lines may be written as `//` or `#` comments. The result is
//! merged into `<language>.json`, appending to an existing category of the
//! same name.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;

pub use config::ConverterConfig;
pub use error::{ConvertError, Result};
pub use models::{Category, Document, Snippet, SnippetLanguage, StorageManager};
pub use parser::{parse_snippet, parse_snippet_into};
