pub mod article_source;
pub mod embedding_port;
pub mod vector_index;
