pub mod provider_kind;
pub mod source_kind;
