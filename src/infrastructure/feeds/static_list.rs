use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use async_trait::async_trait;

/// Serves the same fixed batch on every fetch.
pub struct StaticSource {
    articles: Vec<ArticleRecord>,
}

impl StaticSource {
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        Ok(self.articles.clone())
    }
}
