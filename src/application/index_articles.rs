use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::memory::catalog::ArticleCatalog;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSummary {
    pub message: String,
}

impl IndexSummary {
    pub fn indexed(count: usize) -> Self {
        Self {
            message: format!("Indexed {count} articles."),
        }
    }
}

pub struct IndexArticlesUseCase {
    source: Arc<dyn ArticleSource>,
    embedder: Arc<dyn EmbeddingProvider>,
    catalog: Arc<ArticleCatalog>,
}

impl IndexArticlesUseCase {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        embedder: Arc<dyn EmbeddingProvider>,
        catalog: Arc<ArticleCatalog>,
    ) -> Self {
        Self { source, embedder, catalog }
    }

    /// Fetch the current batch, embed it and append it to the catalog.
    ///
    /// The catalog grows by the batch size on success and is untouched on
    /// any failure. There is no cap on total size.
    pub async fn execute(&self) -> Result<IndexSummary, DomainError> {
        let articles = self.source.fetch().await?;
        let count = articles.len();
        if count == 0 {
            tracing::info!(source = self.source.name(), "no articles fetched");
            return Ok(IndexSummary::indexed(0));
        }

        let texts: Vec<String> = articles.iter().map(ArticleRecord::embedding_text).collect();

        let mut catalog = self.catalog.lock().await;
        let vectors = self.embedder.embed(&texts, InputType::Document).await?;
        catalog.append(articles, vectors)?;

        tracing::info!(
            source = self.source.name(),
            indexed = count,
            total = catalog.document_count(),
            "indexed articles"
        );
        Ok(IndexSummary::indexed(count))
    }
}
