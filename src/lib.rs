pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;
pub mod telemetry;

use crate::application::index_articles::{IndexArticlesUseCase, IndexSummary};
use crate::application::query_articles::{QueryArticlesUseCase, QueryResponse};
use crate::config::Settings;
use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use crate::domain::values::provider_kind::ProviderKind;
use crate::domain::values::source_kind::SourceKind;
use crate::infrastructure::embeddings::hashing::HashingProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::embeddings::tei::TeiProvider;
use crate::infrastructure::feeds::newsdata::NewsDataSource;
use crate::infrastructure::feeds::scraper_agent::ScraperAgentSource;
use crate::infrastructure::memory::catalog::ArticleCatalog;
use crate::infrastructure::memory::flat_index::FlatL2Index;
use std::sync::Arc;

/// The retrieval service: one article catalog plus the use cases over it.
pub struct FinBrief {
    index_uc: IndexArticlesUseCase,
    query_uc: QueryArticlesUseCase,
    catalog: Arc<ArticleCatalog>,
    news_feed: Option<Arc<dyn ArticleSource>>,
}

impl FinBrief {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let emb = &settings.embedding;
        let embedder: Arc<dyn EmbeddingProvider> = match emb.provider {
            ProviderKind::Hashing => Arc::new(HashingProvider::new(emb.dimension)),
            ProviderKind::Tei => Arc::new(TeiProvider::new(emb.base_url.clone(), emb.dimension)),
            ProviderKind::OpenAi => {
                if emb.api_key.is_empty() {
                    return Err(DomainError::Config(
                        "FINBRIEF_EMBEDDING_API_KEY is required for the openai provider".into(),
                    ));
                }
                Arc::new(OpenAiProvider::new(emb.api_key.clone(), emb.model.clone(), emb.dimension))
            }
        };

        let src = &settings.source;
        let news_feed: Option<Arc<dyn ArticleSource>> = match &src.newsdata_api_key {
            Some(key) => Some(Arc::new(NewsDataSource::new(
                key.clone(),
                src.newsdata_query.clone(),
                src.batch_cap,
            )?)),
            None => None,
        };

        let source: Arc<dyn ArticleSource> = match src.kind {
            SourceKind::Scraper => Arc::new(ScraperAgentSource::new(src.scraper_url.clone())),
            SourceKind::NewsData => news_feed.clone().ok_or_else(|| {
                DomainError::Config("NEWSDATA_API_KEY is required for the newsdata source".into())
            })?,
        };

        tracing::info!(
            provider = %emb.provider,
            dimension = emb.dimension,
            source = source.name(),
            top_k = settings.top_k,
            "retrieval service configured"
        );

        let mut fb = Self::with_providers(source, embedder, settings.top_k)?;
        fb.news_feed = news_feed;
        Ok(fb)
    }

    pub fn with_providers(
        source: Arc<dyn ArticleSource>,
        embedder: Arc<dyn EmbeddingProvider>,
        top_k: usize,
    ) -> Result<Self, DomainError> {
        let dimension = embedder.dimension();
        if dimension == 0 {
            return Err(DomainError::Config("embedding provider reports dimension 0".into()));
        }
        Self::with_index(source, embedder, Box::new(FlatL2Index::new(dimension)), top_k)
    }

    /// Assemble the service over a caller-supplied (empty) vector index.
    ///
    /// The index must accept vectors of exactly the embedder's dimension.
    pub fn with_index(
        source: Arc<dyn ArticleSource>,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Box<dyn VectorIndex>,
        top_k: usize,
    ) -> Result<Self, DomainError> {
        if index.dimension() != embedder.dimension() {
            return Err(DomainError::Config(format!(
                "vector index expects dimension {}, embedder produces {}",
                index.dimension(),
                embedder.dimension()
            )));
        }
        let catalog = Arc::new(ArticleCatalog::new(index));

        Ok(Self {
            index_uc: IndexArticlesUseCase::new(source, embedder.clone(), catalog.clone()),
            query_uc: QueryArticlesUseCase::new(embedder, catalog.clone(), top_k),
            catalog,
            news_feed: None,
        })
    }

    /// Serve `scrape_market_news` from this feed.
    pub fn with_news_feed(mut self, feed: Arc<dyn ArticleSource>) -> Self {
        self.news_feed = Some(feed);
        self
    }

    pub async fn index_articles(&self) -> Result<IndexSummary, DomainError> {
        self.index_uc.execute().await
    }

    pub async fn query_articles(&self, q: &str) -> Result<QueryResponse, DomainError> {
        self.query_uc.execute(q).await
    }

    pub async fn scrape_market_news(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        match &self.news_feed {
            Some(feed) => feed.fetch().await,
            None => Err(DomainError::Config("no news feed configured".into())),
        }
    }

    pub async fn document_count(&self) -> usize {
        self.catalog.document_count().await
    }

    pub async fn vector_count(&self) -> usize {
        self.catalog.vector_count().await
    }
}
