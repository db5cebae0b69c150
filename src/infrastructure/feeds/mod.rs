pub mod newsdata;
pub mod scraper_agent;
pub mod static_list;

use crate::domain::error::DomainError;

/// Failures inside a feed adapter, before they reach the domain.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    /// Missing API key and the like; surfaces as a configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<FeedError> for DomainError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::Config(msg) => DomainError::Config(msg),
            other => DomainError::Fetch(other.to_string()),
        }
    }
}
