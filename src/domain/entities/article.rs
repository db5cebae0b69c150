use serde::{Deserialize, Serialize};

/// Separator placed between title and link when building embedding text.
pub const TEXT_SEPARATOR: &str = ". ";

/// A scraped news article. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub link: String,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Text representation for embedding
    pub fn embedding_text(&self) -> String {
        format!("{}{}{}", self.title, TEXT_SEPARATOR, self.link)
    }
}
