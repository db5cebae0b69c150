use super::FeedError;
use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_SCRAPER_URL: &str = "http://localhost:8002";

/// Pulls the current article batch from the scraper service's
/// `GET /scrape_market_news` endpoint.
pub struct ScraperAgentSource {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    articles: Vec<ArticleRecord>,
}

impl ScraperAgentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_batch(&self) -> Result<Vec<ArticleRecord>, FeedError> {
        let url = format!("{}/scrape_market_news", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Network(format!(
                "scraper returned {} for {url}",
                resp.status()
            )));
        }

        let body: ScrapeResponse = resp
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;
        Ok(body.articles)
    }
}

#[async_trait]
impl ArticleSource for ScraperAgentSource {
    fn name(&self) -> &str {
        "scraper_agent"
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError> {
        Ok(self.fetch_batch().await?)
    }
}
