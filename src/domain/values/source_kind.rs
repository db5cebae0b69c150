use std::fmt;
use std::str::FromStr;

/// Where indexing pulls its article batches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// The scraper service's `/scrape_market_news` endpoint
    #[default]
    Scraper,
    /// newsdata.io directly
    NewsData,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Scraper => write!(f, "scraper"),
            SourceKind::NewsData => write!(f, "newsdata"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scraper" => Ok(SourceKind::Scraper),
            "newsdata" => Ok(SourceKind::NewsData),
            _ => Err(format!("Unknown article source: {s}")),
        }
    }
}
