use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, warn};

use snipconv::models::{LanguageSource, read_snippet_file, resolve_language};
use snipconv::{ConverterConfig, Document, SnippetLanguage, StorageManager, parse_snippet};

use super::CliArgs;

/// Result of converting one snippet file
#[derive(Debug)]
pub struct Conversion {
    pub language: SnippetLanguage,
    pub document: Document,
    /// `None` on a dry run
    pub written_to: Option<PathBuf>,
}

/// Reads, parses and merges the snippet file named in `args`.
///
/// The document is only written once parsing and merging both succeeded.
pub fn convert_file(args: &CliArgs, config: &ConverterConfig) -> Result<Conversion> {
    let content = read_snippet_file(&args.file)?;

    let (language, source) = resolve_language(&args.file, args.language.as_deref(), config);
    if source == LanguageSource::Default {
        warn!(
            language = language.canonical_name(),
            "programming language not defined, using default"
        );
        println!(
            "{}  {} Programming language not defined. Using default ({})",
            "┃".bright_magenta(),
            "Warning:".bright_yellow(),
            language.display_name()
        );
    }
    debug!(
        file = %args.file.display(),
        language = language.canonical_name(),
        ?source,
        "resolved language"
    );

    let category = parse_snippet(&content)
        .with_context(|| format!("Failed to parse `{}`", args.file.display()))?;

    let storage = StorageManager::from_config(config);
    let name = language.canonical_name().to_string();

    if args.dry_run {
        let document = storage.merged_document(category, &name)?;
        return Ok(Conversion {
            language,
            document,
            written_to: None,
        });
    }

    let document = storage.save_category(category, &name)?;
    Ok(Conversion {
        language,
        document,
        written_to: Some(storage.document_path(&name)),
    })
}

/// Prints the outcome of a conversion
pub fn report(conversion: &Conversion, config: &ConverterConfig) -> Result<()> {
    match &conversion.written_to {
        Some(path) => println!(
            "{}  {} {} ({} categories, {} snippets)",
            "┃".bright_magenta(),
            "Saved".bright_green().bold(),
            path.display().to_string().bright_white(),
            conversion.document.categories.len(),
            conversion.document.snippet_count()
        ),
        None => {
            let storage = StorageManager::from_config(config);
            println!("{}", storage.render(&conversion.document)?);
        }
    }
    Ok(())
}
