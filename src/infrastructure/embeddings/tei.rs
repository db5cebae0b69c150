use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::Serialize;

/// Client for a text-embeddings-inference server, by default hosting
/// `sentence-transformers/all-MiniLM-L6-v2` (384 dimensions).
pub struct TeiProvider {
    client: Client,
    base_url: String,
    dimension: usize,
}

#[derive(Serialize)]
struct TeiRequest<'a> {
    inputs: &'a [String],
    normalize: bool,
}

impl TeiProvider {
    pub fn new(base_url: Option<String>, dimension: usize) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or_else(|| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            dimension,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for TeiProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        let url = format!("{}/embed", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&TeiRequest {
                inputs: texts,
                normalize: true,
            })
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("TEI request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!("TEI {status}: {body}")));
        }

        resp.json::<Vec<Vec<f32>>>()
            .await
            .map_err(|e| DomainError::Embedding(format!("TEI response parse error: {e}")))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
