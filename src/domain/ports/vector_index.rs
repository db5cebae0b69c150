use crate::domain::error::DomainError;

/// A single search hit: ordinal position in the index and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub ordinal: usize,
    pub distance: f32,
}

/// Append-only nearest-neighbour index addressed by ordinal position.
///
/// Implementations must validate a whole batch before storing any of it, so a
/// rejected `add` leaves the index exactly as it was.
pub trait VectorIndex: Send {
    fn add(&mut self, vectors: Vec<Vec<f32>>) -> Result<(), DomainError>;

    /// Up to `k` neighbours ordered by ascending distance (closest first).
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dimension(&self) -> usize;
}
