pub mod embeddings;
pub mod feeds;
pub mod memory;
