use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Category;

/// Every category stored for one target language.
///
/// Serializes as a bare JSON array of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub categories: Vec<Category>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.category_name == name)
    }

    /// Merges `category` into the document.
    ///
    /// Snippets are appended to the first category with the exact same name;
    /// an unknown name is appended as a new category at the end.
    pub fn merge_category(&mut self, category: Category) {
        match self
            .categories
            .iter_mut()
            .find(|existing| existing.category_name == category.category_name)
        {
            Some(existing) => {
                debug!(
                    category = %existing.category_name,
                    added = category.snippets.len(),
                    "appending snippets to existing category"
                );
                existing.snippets.extend(category.snippets);
            }
            None => {
                debug!(category = %category.category_name, "adding new category");
                self.categories.push(category);
            }
        }
    }

    pub fn snippet_count(&self) -> usize {
        self.categories.iter().map(|c| c.snippets.len()).sum()
    }
}

impl From<Category> for Document {
    fn from(category: Category) -> Self {
        Self {
            categories: vec![category],
        }
    }
}
