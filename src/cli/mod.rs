//! CLI Module for snipconv
//! Converts one annotated snippet file into its language's JSON document.

pub mod commands;
pub mod tree;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use snipconv::ConverterConfig;

#[derive(Debug, Parser)]
#[command(
    name = "snipconv",
    version,
    about = "Convert an annotated code snippet into a per-language JSON document"
)]
pub struct CliArgs {
    /// Snippet file to convert
    pub file: PathBuf,

    /// Language to use when the file extension is not recognised
    pub language: Option<String>,

    /// Directory the `<language>.json` document is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Config file (defaults to `<config dir>/snipconv/config.toml`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the merged document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Show the resulting document as a tree
    #[arg(long)]
    pub tree: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the config file and applies command-line overrides
    pub fn resolve_config(&self) -> Result<ConverterConfig> {
        let mut config = ConverterConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Parses the command line, printing usage, help or version output instead
/// of exiting when clap stops early
pub fn parse_args<I, T>(args: I) -> Option<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => Some(args),
        Err(err) => {
            err.print().ok();
            None
        }
    }
}

/// Executes a conversion for the parsed arguments
pub fn execute_cli(args: &CliArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let conversion = commands::convert_file(args, &config)?;

    commands::report(&conversion, &config)?;
    if args.tree {
        tree::display_tree(&conversion.document, &conversion.language);
    }

    Ok(())
}
