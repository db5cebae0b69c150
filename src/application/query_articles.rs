use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::memory::catalog::ArticleCatalog;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub results: Vec<ArticleRecord>,
}

pub struct QueryArticlesUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    catalog: Arc<ArticleCatalog>,
    top_k: usize,
}

impl QueryArticlesUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, catalog: Arc<ArticleCatalog>, top_k: usize) -> Self {
        Self { embedder, catalog, top_k }
    }

    pub async fn execute(&self, q: &str) -> Result<QueryResponse, DomainError> {
        let mut vectors = self.embedder.embed(&[q.to_string()], InputType::Query).await?;
        if vectors.is_empty() {
            return Err(DomainError::Embedding("embedder returned no vector for query".into()));
        }
        let query_vector = vectors.swap_remove(0);

        let results = self.catalog.lock().await.nearest(&query_vector, self.top_k)?;
        tracing::debug!(query = q, hits = results.len(), "query served");

        Ok(QueryResponse {
            query: q.to_string(),
            results,
        })
    }
}
