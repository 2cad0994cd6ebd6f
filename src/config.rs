use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConvertError, Result};

pub const DEFAULT_LANGUAGE: &str = "python";
pub const INDENT_SIZE: usize = 2;

/// Converter settings, read from `config.toml` when present
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Language used when neither the extension nor the caller names one
    pub default_language: String,
    /// Directory the `<language>.json` documents are written to
    pub output_dir: PathBuf,
    /// Indentation width of the written JSON
    pub indent: usize,
    /// Extra extension to language mappings, e.g. `lua = "lua"`
    pub languages: BTreeMap<String, String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            output_dir: PathBuf::from("."),
            indent: INDENT_SIZE,
            languages: BTreeMap::new(),
        }
    }
}

impl ConverterConfig {
    /// Default location, `<config dir>/snipconv/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snipconv").join("config.toml"))
    }

    /// Loads the config from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| ConvertError::from_input_io(path, source))?;
        let mut config = Self::from_toml(&content).map_err(|message| ConvertError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        config.languages = config
            .languages
            .into_iter()
            .map(|(ext, name)| (ext.trim_start_matches('.').to_lowercase(), name))
            .collect();

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ConverterConfig::from_toml("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.default_language, "python");
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn reads_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "default_language = \"javascript\"\n\n[languages]\n\".LUA\" = \"lua\"\n",
        )
        .unwrap();

        let config = ConverterConfig::load(Some(&path)).unwrap();
        assert_eq!(config.default_language, "javascript");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.languages.get("lua").map(String::as_str), Some("lua"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "indent = \"wide\"").unwrap();

        let err = ConverterConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConvertError::Config { .. }));
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConverterConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConvertError::NotFound { .. }));
    }
}
