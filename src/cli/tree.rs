use colored::Colorize;
use snipconv::{Document, SnippetLanguage};

/// Renders the document as a category / snippet tree, one entry per line
pub fn tree_lines(document: &Document, language: &SnippetLanguage) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}  {} {}",
        "┃".bright_magenta(),
        language.display_name().bold(),
        format!(
            "({} categories, {} snippets)",
            document.categories.len(),
            document.snippet_count()
        )
        .bright_black()
    ));

    if document.categories.is_empty() {
        lines.push(format!("{}  No categories found.", "┃".bright_magenta()));
        return lines;
    }

    let category_count = document.categories.len();
    for (i, category) in document.categories.iter().enumerate() {
        let is_last_category = i == category_count - 1;
        let connector = if is_last_category { "└── " } else { "├── " };
        // Last category doesn't need a guide line below it
        let guide = if is_last_category { "   " } else { "┃  " };

        lines.push(format!(
            "{}  {}{} {}",
            "┃".bright_magenta(),
            connector,
            category.category_name.bright_blue().bold(),
            format!("[{}]", category.snippets.len()).bright_black()
        ));

        for (j, snippet) in category.snippets.iter().enumerate() {
            let connector = if j == category.snippets.len() - 1 {
                "└── "
            } else {
                "├── "
            };

            let tags = snippet
                .tags
                .iter()
                .filter(|tag| !tag.is_empty())
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ");

            lines.push(format!(
                "{}  {}{}{} {} {}",
                "┃".bright_magenta(),
                guide,
                connector,
                snippet.title.bright_white(),
                format!("by {}", snippet.author).bright_black().italic(),
                tags.bright_green()
            ));
        }
    }

    lines
}

/// Displays the document content in a tree-like structure
pub fn display_tree(document: &Document, language: &SnippetLanguage) {
    for line in tree_lines(document, language) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipconv::{Category, Snippet};

    fn snippet(title: &str, tags: &[&str]) -> Snippet {
        Snippet {
            title: title.to_string(),
            description: String::new(),
            code: vec!["pass".to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: "Jane".to_string(),
        }
    }

    #[test]
    fn lists_categories_and_snippets_in_order() {
        let document = Document {
            categories: vec![
                Category {
                    category_name: "Math".to_string(),
                    snippets: vec![snippet("Add", &["math"]), snippet("Sub", &[])],
                },
                Category {
                    category_name: "Files".to_string(),
                    snippets: vec![snippet("Read", &["io", ""])],
                },
            ],
        };

        let lines = tree_lines(&document, &SnippetLanguage::Python);

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Python"));
        assert!(lines[1].contains("├── ") && lines[1].contains("Math"));
        assert!(lines[2].contains("Add") && lines[2].contains("#math"));
        assert!(lines[3].contains("└── ") && lines[3].contains("Sub"));
        assert!(lines[4].contains("└── ") && lines[4].contains("Files"));
        assert!(lines[5].contains("Read") && !lines[5].contains("# "));
    }

    #[test]
    fn empty_document_says_so() {
        let lines = tree_lines(&Document::new(), &SnippetLanguage::Rust);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("No categories found."));
    }
}
