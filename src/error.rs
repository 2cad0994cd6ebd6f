use std::path::PathBuf;
use thiserror::Error;

/// Minimum number of lines a snippet file must contain:
/// 5 metadata lines, 1 separator and at least one line of code
pub const MIN_SNIPPET_LINES: usize = 7;

/// Errors raised while reading, parsing or persisting snippets
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File `{}` not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("File `{}` is not readable", .path.display())]
    Permission { path: PathBuf },

    #[error(
        "Invalid snippet syntax: found {lines} lines, needs at least {} \
         (5 metadata, 1 empty line and at least 1 line of code)",
        MIN_SNIPPET_LINES
    )]
    Format { lines: usize },

    #[error("Language `{name}` cannot be used as an output file name")]
    InvalidLanguage { name: String },

    #[error("Existing output `{}` does not match the snippet schema: {source}", .path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to access `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file `{}`: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Maps an I/O failure on an input file to the matching error kind
    pub fn from_input_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ConvertError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ConvertError::Permission { path },
            _ => ConvertError::Io { path, source },
        }
    }
}
