//! Runtime settings, read from environment variables.

use crate::domain::error::DomainError;
use crate::domain::values::provider_kind::ProviderKind;
use crate::domain::values::source_kind::SourceKind;
use crate::infrastructure::embeddings::hashing::DEFAULT_DIMENSION;
use crate::infrastructure::feeds::newsdata::{NewsDataQuery, DEFAULT_BATCH_CAP};
use crate::infrastructure::feeds::scraper_agent::DEFAULT_SCRAPER_URL;

pub const DEFAULT_BIND: &str = "0.0.0.0:8003";
pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone)]
pub struct EmbeddingSettings {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub dimension: usize,
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub kind: SourceKind,
    pub scraper_url: String,
    pub newsdata_api_key: Option<String>,
    pub newsdata_query: NewsDataQuery,
    /// Articles kept per NewsData fetch.
    pub batch_cap: usize,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    /// Neighbours returned per query.
    pub top_k: usize,
    pub embedding: EmbeddingSettings,
    pub source: SourceSettings,
    pub production: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            top_k: DEFAULT_TOP_K,
            embedding: EmbeddingSettings {
                provider: ProviderKind::default(),
                api_key: String::new(),
                model: None,
                base_url: None,
                dimension: DEFAULT_DIMENSION,
            },
            source: SourceSettings {
                kind: SourceKind::default(),
                scraper_url: DEFAULT_SCRAPER_URL.to_string(),
                newsdata_api_key: None,
                newsdata_query: NewsDataQuery::default(),
                batch_cap: DEFAULT_BATCH_CAP,
            },
            production: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match var("FINBRIEF_EMBEDDING_PROVIDER") {
            Some(p) => p.parse().map_err(DomainError::Config)?,
            None => defaults.embedding.provider,
        };
        let kind = match var("FINBRIEF_ARTICLE_SOURCE") {
            Some(s) => s.parse().map_err(DomainError::Config)?,
            None => defaults.source.kind,
        };

        let mut newsdata_query = defaults.source.newsdata_query;
        if let Some(q) = var("NEWSDATA_QUERY") {
            newsdata_query.q = q;
        }
        if let Some(language) = var("NEWSDATA_LANGUAGE") {
            newsdata_query.language = language;
        }
        if let Some(category) = var("NEWSDATA_CATEGORY") {
            newsdata_query.category = category;
        }

        Ok(Self {
            bind: var("FINBRIEF_BIND").unwrap_or(defaults.bind),
            top_k: parse_count(var("FINBRIEF_TOP_K"), "FINBRIEF_TOP_K", defaults.top_k)?,
            embedding: EmbeddingSettings {
                provider,
                api_key: var("FINBRIEF_EMBEDDING_API_KEY").unwrap_or_default(),
                model: var("FINBRIEF_EMBEDDING_MODEL"),
                base_url: var("FINBRIEF_EMBEDDING_URL"),
                dimension: parse_count(
                    var("FINBRIEF_EMBEDDING_DIM"),
                    "FINBRIEF_EMBEDDING_DIM",
                    defaults.embedding.dimension,
                )?,
            },
            source: SourceSettings {
                kind,
                scraper_url: var("FINBRIEF_SCRAPER_URL").unwrap_or(defaults.source.scraper_url),
                newsdata_api_key: var("NEWSDATA_API_KEY"),
                newsdata_query,
                batch_cap: parse_count(
                    var("FINBRIEF_BATCH_CAP"),
                    "FINBRIEF_BATCH_CAP",
                    defaults.source.batch_cap,
                )?,
            },
            production: var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
        })
    }
}

fn parse_count(raw: Option<String>, key: &str, default: usize) -> Result<usize, DomainError> {
    match raw {
        None => Ok(default),
        Some(s) => match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(DomainError::Config(format!("{key} must be a positive integer, got {s:?}"))),
        },
    }
}
