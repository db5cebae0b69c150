use crate::domain::entities::article::ArticleRecord;

/// Append-only article list. Position `i` is the article's ordinal.
#[derive(Debug, Default)]
pub struct DocumentStore {
    articles: Vec<ArticleRecord>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, articles: Vec<ArticleRecord>) {
        self.articles.extend(articles);
    }

    pub fn get(&self, ordinal: usize) -> Option<&ArticleRecord> {
        self.articles.get(ordinal)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
