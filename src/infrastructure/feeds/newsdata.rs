use super::FeedError;
use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://newsdata.io";
pub const DEFAULT_BATCH_CAP: usize = 5;

/// Search parameters for the NewsData `/api/1/news` endpoint.
#[derive(Debug, Clone)]
pub struct NewsDataQuery {
    pub q: String,
    pub language: String,
    pub category: String,
}

impl Default for NewsDataQuery {
    fn default() -> Self {
        Self {
            q: "stock market".to_string(),
            language: "en".to_string(),
            category: "business".to_string(),
        }
    }
}

/// Latest market headlines from newsdata.io, capped at `batch_cap` articles.
pub struct NewsDataSource {
    api_key: String,
    query: NewsDataQuery,
    batch_cap: usize,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    status: String,
    #[serde(default)]
    results: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct NewsDataItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl NewsDataSource {
    pub fn new(api_key: String, query: NewsDataQuery, batch_cap: usize) -> Result<Self, FeedError> {
        if api_key.trim().is_empty() {
            return Err(FeedError::Config("NEWSDATA_API_KEY is not set".into()));
        }
        Ok(Self {
            api_key,
            query,
            batch_cap,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch_batch(&self) -> Result<Vec<ArticleRecord>, FeedError> {
        let url = format!("{}/api/1/news", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("q", self.query.q.as_str()),
                ("language", self.query.language.as_str()),
                ("category", self.query.category.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "NewsData API returned {}",
                resp.status()
            )));
        }

        let body: NewsDataResponse = resp
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;
        parse_results(body, self.batch_cap)
    }
}

fn parse_results(body: NewsDataResponse, batch_cap: usize) -> Result<Vec<ArticleRecord>, FeedError> {
    if body.status != "success" {
        return Err(FeedError::Network(format!(
            "NewsData status {}: {}",
            body.status, body.results
        )));
    }
    if body.results.is_null() {
        return Ok(vec![]);
    }

    let items: Vec<NewsDataItem> =
        serde_json::from_value(body.results).map_err(|e| FeedError::Parse(e.to_string()))?;

    let articles: Vec<ArticleRecord> = items
        .into_iter()
        .filter_map(|item| match (item.title, item.link) {
            (Some(title), Some(link)) => Some(ArticleRecord::new(title, link)),
            _ => None,
        })
        .take(batch_cap)
        .collect();
    Ok(articles)
}

#[async_trait]
impl ArticleSource for NewsDataSource {
    fn name(&self) -> &str {
        "newsdata"
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        let articles = self.fetch_batch().await?;
        tracing::debug!(count = articles.len(), "fetched NewsData articles");
        Ok(articles)
    }
}
