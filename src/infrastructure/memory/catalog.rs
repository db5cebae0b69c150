//! The Document Store / Vector Index pair behind one lock.
//!
//! Ordinal `i` in the document store always names the same article as vector
//! `i` in the index. Every mutation goes through [`CatalogState::append`],
//! which validates the batch before touching either collection.

use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::VectorIndex;
use crate::infrastructure::memory::document_store::DocumentStore;
use tokio::sync::{Mutex, MutexGuard};

pub struct ArticleCatalog {
    state: Mutex<CatalogState>,
}

pub struct CatalogState {
    documents: DocumentStore,
    index: Box<dyn VectorIndex>,
}

impl ArticleCatalog {
    pub fn new(index: Box<dyn VectorIndex>) -> Self {
        Self {
            state: Mutex::new(CatalogState {
                documents: DocumentStore::new(),
                index,
            }),
        }
    }

    /// Enter the critical section. Hold the guard across the embedding call
    /// and the append so concurrent indexing cannot interleave.
    pub async fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().await
    }

    pub async fn document_count(&self) -> usize {
        self.state.lock().await.document_count()
    }

    pub async fn vector_count(&self) -> usize {
        self.state.lock().await.vector_count()
    }
}

impl CatalogState {
    /// Append a batch of articles with their embeddings, same order.
    ///
    /// Nothing is stored unless the whole batch is valid.
    pub fn append(
        &mut self,
        articles: Vec<ArticleRecord>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<(), DomainError> {
        if articles.len() != vectors.len() {
            return Err(DomainError::Embedding(format!(
                "expected {} embeddings, got {}",
                articles.len(),
                vectors.len()
            )));
        }

        self.index.add(vectors)?;
        self.documents.extend(articles);
        debug_assert_eq!(self.documents.len(), self.index.len());
        Ok(())
    }

    /// Closest stored articles to `query`, at most `k`, closest first.
    ///
    /// An empty catalog yields no results. Ordinals the document store does
    /// not (yet) hold are skipped.
    pub fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<ArticleRecord>, DomainError> {
        if self.index.is_empty() {
            return Ok(vec![]);
        }

        let neighbors = self.index.search(query, k)?;
        let results = neighbors
            .into_iter()
            .filter_map(|n| match self.documents.get(n.ordinal) {
                Some(article) => Some(article.clone()),
                None => {
                    tracing::debug!(ordinal = n.ordinal, "skipping stale ordinal");
                    None
                }
            })
            .collect();
        Ok(results)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn vector_count(&self) -> usize {
        self.index.len()
    }
}
