use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// The news-fetch collaborator consumed by indexing.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Name of this source, used in logs.
    fn name(&self) -> &str;

    /// Fetch the current batch of articles. The source decides the batch size.
    async fn fetch(&self) -> Result<Vec<ArticleRecord>, DomainError>;
}
