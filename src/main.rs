//! snipconv - Snippet to JSON converter
//!
//! Reads one annotated snippet file and merges it into the JSON document of
//! its language (`python.json`, `javascript.json`, ...).
//!
//! Failures are reported on stderr; the process still exits normally.

use colored::Colorize;

mod cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let Some(args) = cli::parse_args(std::env::args_os()) else {
        return Ok(());
    };
    snipconv::logging::init_logging(args.verbose);

    if let Err(err) = cli::execute_cli(&args) {
        tracing::debug!(error = ?err, "conversion failed");
        eprintln!("{}  {} {:#}", "┃".bright_magenta(), "Error:".bright_red().bold(), err);
    }

    Ok(())
}
