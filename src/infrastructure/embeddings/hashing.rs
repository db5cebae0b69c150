use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};

pub const DEFAULT_DIMENSION: usize = 384;

/// Local feature-hashing embedder.
///
/// Each lower-cased alphanumeric token is hashed into one of `dimension`
/// buckets with a hash-derived sign, then the vector is L2-normalised. Texts
/// sharing tokens land close together; identical texts embed identically.
pub struct HashingProvider {
    dimension: usize,
}

impl HashingProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0_f32; self.dimension];
        if self.dimension == 0 {
            return vec;
        }
        for token in tokenize(text) {
            let hash = fnv1a_64(token.as_bytes());
            let bucket = (hash % self.dimension as u64) as usize;
            let sign = if (hash >> 63) == 0 { 1.0 } else { -1.0 };
            vec[bucket] += sign;
        }
        normalize(&mut vec);
        vec
    }
}

impl Default for HashingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashingProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn embed(provider: &HashingProvider, text: &str) -> Vec<f32> {
        provider
            .embed(&[text.to_string()], InputType::Document)
            .await
            .unwrap()
            .remove(0)
    }

    #[tokio::test]
    async fn test_default_dimension() {
        let provider = HashingProvider::default();
        assert_eq!(provider.dimension(), 384);
        assert_eq!(embed(&provider, "Stocks rally").await.len(), 384);
    }

    #[tokio::test]
    async fn test_deterministic() {
        let provider = HashingProvider::default();
        assert_eq!(
            embed(&provider, "Markets open higher").await,
            embed(&provider, "Markets open higher").await
        );
    }

    #[tokio::test]
    async fn test_case_and_punctuation_insensitive() {
        let provider = HashingProvider::default();
        assert_eq!(
            embed(&provider, "Stocks, RALLY!").await,
            embed(&provider, "stocks rally").await
        );
    }

    #[tokio::test]
    async fn test_unit_norm() {
        let provider = HashingProvider::default();
        let v = embed(&provider, "Nvidia beats earnings estimates").await;
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_empty_text_is_zero_vector() {
        let provider = HashingProvider::new(8);
        assert_eq!(embed(&provider, "").await, vec![0.0; 8]);
    }

    #[tokio::test]
    async fn test_one_vector_per_text() {
        let provider = HashingProvider::new(16);
        let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let vectors = provider.embed(&texts, InputType::Document).await.unwrap();
        assert_eq!(vectors.len(), 3);
    }
}
