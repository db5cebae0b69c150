use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{Neighbor, VectorIndex};

/// Exhaustive squared-L2 index. Vectors are stored row-major in one buffer.
pub struct FlatL2Index {
    dimension: usize,
    data: Vec<f32>,
}

impl FlatL2Index {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            data: Vec::new(),
        }
    }

    fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum()
    }

    fn row(&self, ordinal: usize) -> &[f32] {
        let start = ordinal * self.dimension;
        &self.data[start..start + self.dimension]
    }
}

impl VectorIndex for FlatL2Index {
    fn add(&mut self, vectors: Vec<Vec<f32>>) -> Result<(), DomainError> {
        if let Some((pos, v)) = vectors
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != self.dimension)
        {
            return Err(DomainError::Embedding(format!(
                "vector {pos} has dimension {} but index expects {}",
                v.len(),
                self.dimension
            )));
        }

        self.data.reserve(vectors.len() * self.dimension);
        for v in vectors {
            self.data.extend_from_slice(&v);
        }
        Ok(())
    }

    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, DomainError> {
        if self.is_empty() || k == 0 {
            return Ok(vec![]);
        }
        if query.len() != self.dimension {
            return Err(DomainError::Embedding(format!(
                "query has dimension {} but index expects {}",
                query.len(),
                self.dimension
            )));
        }

        let mut hits: Vec<Neighbor> = (0..self.len())
            .map(|ordinal| Neighbor {
                ordinal,
                distance: Self::squared_l2(query, self.row(ordinal)),
            })
            .collect();

        // Stable sort keeps ascending ordinal order among equal distances.
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(k);
        Ok(hits)
    }

    fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.data.len() / self.dimension
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
