//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use finbrief::domain::entities::article::ArticleRecord;
use finbrief::domain::error::DomainError;
use finbrief::domain::ports::article_source::ArticleSource;
use finbrief::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use finbrief::infrastructure::embeddings::hashing::HashingProvider;
use finbrief::infrastructure::feeds::static_list::StaticSource;
use finbrief::FinBrief;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn article(title: &str, link: &str) -> ArticleRecord {
    ArticleRecord::new(title, link)
}

pub fn rally_and_fall() -> Vec<ArticleRecord> {
    vec![
        article("Stocks rally", "http://x/1"),
        article("Stocks fall", "http://x/2"),
    ]
}

pub fn headlines() -> Vec<ArticleRecord> {
    vec![
        article("Nvidia beats earnings estimates", "http://news/nvda"),
        article("Fed holds interest rates steady", "http://news/fed"),
        article("Oil prices slide on supply glut", "http://news/oil"),
        article("Apple unveils new iPhone lineup", "http://news/aapl"),
        article("Treasury yields climb after jobs report", "http://news/yields"),
    ]
}

pub fn setup(articles: Vec<ArticleRecord>) -> FinBrief {
    setup_with(Arc::new(StaticSource::new(articles)))
}

pub fn setup_with(source: Arc<dyn ArticleSource>) -> FinBrief {
    FinBrief::with_providers(source, Arc::new(HashingProvider::default()), 3).unwrap()
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Hands out a different batch on each fetch, then empty batches.
pub struct SequenceSource {
    batches: Mutex<VecDeque<Vec<ArticleRecord>>>,
}

impl SequenceSource {
    pub fn new(batches: Vec<Vec<ArticleRecord>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
        }
    }
}

#[async_trait]
impl ArticleSource for SequenceSource {
    fn name(&self) -> &str {
        "sequence"
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        Ok(self.batches.lock().unwrap().pop_front().unwrap_or_default())
    }
}

pub struct FailingSource;

#[async_trait]
impl ArticleSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        Err(DomainError::Fetch("connection refused".into()))
    }
}

/// What a misbehaving embedder does on every call.
#[derive(Clone, Copy)]
pub enum Fault {
    Error,
    DropLast,
    WrongDimension,
}

pub struct FaultyEmbedder {
    pub fault: Fault,
    pub dimension: usize,
}

#[async_trait]
impl EmbeddingProvider for FaultyEmbedder {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        match self.fault {
            Fault::Error => Err(DomainError::Embedding("model unavailable".into())),
            Fault::DropLast => Ok(texts
                .iter()
                .skip(1)
                .map(|_| vec![0.0; self.dimension])
                .collect()),
            Fault::WrongDimension => Ok(texts.iter().map(|_| vec![0.0; self.dimension + 1]).collect()),
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Delegates to the hashing embedder until `fail_after` calls have been made.
pub struct FlakyEmbedder {
    inner: HashingProvider,
    calls: Mutex<usize>,
    fail_after: usize,
}

impl FlakyEmbedder {
    pub fn new(fail_after: usize) -> Self {
        Self {
            inner: HashingProvider::default(),
            calls: Mutex::new(0),
            fail_after,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for FlakyEmbedder {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if call > self.fail_after {
            return Err(DomainError::Embedding("model crashed".into()));
        }
        self.inner.embed(texts, input_type).await
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }
}
