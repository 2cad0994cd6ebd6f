//! Snippet file parser
//!
//! A snippet file carries its metadata on fixed lines, each optionally
//! written as a comment so the file stays valid source code:
//!
//! ```text
//! 0  category
//! 1  title
//! 2  description
//! 3  tags, separated, by commas
//! 4  author
//! 5  (separator, ignored)
//! 6+ code, copied verbatim
//! ```

use crate::error::{ConvertError, MIN_SNIPPET_LINES, Result};
use crate::models::{Category, Snippet};

const CATEGORY_LINE: usize = 0;
const TITLE_LINE: usize = 1;
const DESCRIPTION_LINE: usize = 2;
const TAGS_LINE: usize = 3;
const AUTHOR_LINE: usize = 4;
const FIRST_CODE_LINE: usize = 6;

/// Parses `text` into a new category holding exactly one snippet
pub fn parse_snippet(text: &str) -> Result<Category> {
    let lines = split_lines(text);
    check_line_count(&lines)?;

    let mut category = Category::new(format_metadata(&lines[CATEGORY_LINE]));
    category.add_snippet(build_snippet(&lines));
    Ok(category)
}

/// Parses `text` and appends the snippet to `category`.
///
/// The category line of `text` is ignored.
pub fn parse_snippet_into(text: &str, category: &mut Category) -> Result<()> {
    let lines = split_lines(text);
    check_line_count(&lines)?;

    category.add_snippet(build_snippet(&lines));
    Ok(())
}

/// Strips one leading `//` or `#` comment marker and surrounding whitespace
pub fn format_metadata(line: &str) -> String {
    let line = line.trim_start();
    let line = line
        .strip_prefix("//")
        .or_else(|| line.strip_prefix('#'))
        .unwrap_or(line);
    line.trim().to_string()
}

/// Splits a comma separated tag line, trimming every tag
pub fn parse_tags(line: &str) -> Vec<String> {
    format_metadata(line)
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect()
}

/// Splits on `\n`, `\r\n` and bare `\r` line breaks
fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect()
}

fn check_line_count(lines: &[String]) -> Result<()> {
    if lines.len() < MIN_SNIPPET_LINES {
        return Err(ConvertError::Format { lines: lines.len() });
    }
    Ok(())
}

fn build_snippet(lines: &[String]) -> Snippet {
    let mut snippet = Snippet::new(
        format_metadata(&lines[TITLE_LINE]),
        format_metadata(&lines[DESCRIPTION_LINE]),
        format_metadata(&lines[AUTHOR_LINE]),
    );
    snippet.tags = parse_tags(&lines[TAGS_LINE]);
    snippet.code = lines[FIRST_CODE_LINE..].to_vec();
    snippet
}
