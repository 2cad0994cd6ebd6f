use serde::{Deserialize, Serialize};

/// A single code sample together with its metadata.
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    /// One entry per source line, blank and comment lines included
    pub code: Vec<String>,
    pub tags: Vec<String>,
    pub author: String,
}

/// A named group of snippets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub snippets: Vec<Snippet>,
}

impl Snippet {
    pub fn new(title: String, description: String, author: String) -> Self {
        Self {
            title,
            description,
            code: Vec::new(),
            tags: Vec::new(),
            author,
        }
    }
}

impl Category {
    pub fn new(category_name: String) -> Self {
        Self {
            category_name,
            snippets: Vec::new(),
        }
    }

    pub fn add_snippet(&mut self, snippet: Snippet) {
        self.snippets.push(snippet);
    }
}
