use std::collections::BTreeMap;
use std::path::Path;

use crate::config::ConverterConfig;

/// Languages a snippet file can be recognised as.
///
/// The canonical name is the stem of the output file (`python.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnippetLanguage {
    Rust,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    PHP,
    Ruby,
    Swift,
    Kotlin,
    Dart,
    HTML,
    CSS,
    SCSS,
    SQL,
    Bash,
    PowerShell,
    Other(String),
}

impl SnippetLanguage {
    /// Get language from file extension, `None` when the extension is unknown
    pub fn from_extension(ext: &str) -> Option<Self> {
        let language = match ext.to_lowercase().as_str() {
            "rs" => SnippetLanguage::Rust,
            "js" | "mjs" | "cjs" => SnippetLanguage::JavaScript,
            "ts" => SnippetLanguage::TypeScript,
            "py" => SnippetLanguage::Python,
            "go" => SnippetLanguage::Go,
            "java" => SnippetLanguage::Java,
            "c" | "h" => SnippetLanguage::C,
            "cpp" | "cc" | "cxx" | "hpp" => SnippetLanguage::Cpp,
            "cs" => SnippetLanguage::CSharp,
            "php" => SnippetLanguage::PHP,
            "rb" => SnippetLanguage::Ruby,
            "swift" => SnippetLanguage::Swift,
            "kt" => SnippetLanguage::Kotlin,
            "dart" => SnippetLanguage::Dart,
            "html" | "htm" => SnippetLanguage::HTML,
            "css" => SnippetLanguage::CSS,
            "scss" => SnippetLanguage::SCSS,
            "sql" => SnippetLanguage::SQL,
            "sh" | "bash" => SnippetLanguage::Bash,
            "ps1" => SnippetLanguage::PowerShell,
            _ => return None,
        };
        Some(language)
    }

    /// Get language from a user supplied name such as `Python` or `lua`
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|language| language.canonical_name() == name)
            .unwrap_or(SnippetLanguage::Other(name))
    }

    fn all() -> Vec<SnippetLanguage> {
        vec![
            SnippetLanguage::Rust,
            SnippetLanguage::JavaScript,
            SnippetLanguage::TypeScript,
            SnippetLanguage::Python,
            SnippetLanguage::Go,
            SnippetLanguage::Java,
            SnippetLanguage::C,
            SnippetLanguage::Cpp,
            SnippetLanguage::CSharp,
            SnippetLanguage::PHP,
            SnippetLanguage::Ruby,
            SnippetLanguage::Swift,
            SnippetLanguage::Kotlin,
            SnippetLanguage::Dart,
            SnippetLanguage::HTML,
            SnippetLanguage::CSS,
            SnippetLanguage::SCSS,
            SnippetLanguage::SQL,
            SnippetLanguage::Bash,
            SnippetLanguage::PowerShell,
        ]
    }

    /// `(file name, display name)` pair
    fn names(&self) -> (&str, &str) {
        match self {
            SnippetLanguage::Rust => ("rust", "Rust"),
            SnippetLanguage::JavaScript => ("javascript", "JavaScript"),
            SnippetLanguage::TypeScript => ("typescript", "TypeScript"),
            SnippetLanguage::Python => ("python", "Python"),
            SnippetLanguage::Go => ("go", "Go"),
            SnippetLanguage::Java => ("java", "Java"),
            SnippetLanguage::C => ("c", "C"),
            SnippetLanguage::Cpp => ("cpp", "C++"),
            SnippetLanguage::CSharp => ("csharp", "C#"),
            SnippetLanguage::PHP => ("php", "PHP"),
            SnippetLanguage::Ruby => ("ruby", "Ruby"),
            SnippetLanguage::Swift => ("swift", "Swift"),
            SnippetLanguage::Kotlin => ("kotlin", "Kotlin"),
            SnippetLanguage::Dart => ("dart", "Dart"),
            SnippetLanguage::HTML => ("html", "HTML"),
            SnippetLanguage::CSS => ("css", "CSS"),
            SnippetLanguage::SCSS => ("scss", "SCSS"),
            SnippetLanguage::SQL => ("sql", "SQL"),
            SnippetLanguage::Bash => ("bash", "Bash"),
            SnippetLanguage::PowerShell => ("powershell", "PowerShell"),
            SnippetLanguage::Other(name) => (name.as_str(), name.as_str()),
        }
    }

    /// Lowercase name used for the output file
    pub fn canonical_name(&self) -> &str {
        self.names().0
    }

    pub fn display_name(&self) -> &str {
        self.names().1
    }
}

/// Resolves the language of a snippet file from its extension.
///
/// `extra` maps extensions to language names and wins over the built-in table.
pub fn language_for_path(path: &Path, extra: &BTreeMap<String, String>) -> Option<SnippetLanguage> {
    let ext = path.extension()?.to_str()?.to_lowercase();

    if let Some(name) = extra.get(&ext) {
        return Some(SnippetLanguage::from_name(name));
    }

    SnippetLanguage::from_extension(&ext)
}

/// Where a resolved language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Extension,
    Override,
    Default,
}

/// Resolves the language for `path`, falling back to `override_name` and
/// then to the configured default when the extension is not recognised
pub fn resolve_language(
    path: &Path,
    override_name: Option<&str>,
    config: &ConverterConfig,
) -> (SnippetLanguage, LanguageSource) {
    if let Some(language) = language_for_path(path, &config.languages) {
        return (language, LanguageSource::Extension);
    }

    match override_name {
        Some(name) => (SnippetLanguage::from_name(name), LanguageSource::Override),
        None => (
            SnippetLanguage::from_name(&config.default_language),
            LanguageSource::Default,
        ),
    }
}
