use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Config error: {0}")]
    Config(String),
}
