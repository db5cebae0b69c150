pub mod hashing;
pub mod openai;
pub mod tei;
