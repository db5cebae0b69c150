pub mod catalog;
pub mod document_store;
pub mod flat_index;
