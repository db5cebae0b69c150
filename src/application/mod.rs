pub mod index_articles;
pub mod query_articles;
