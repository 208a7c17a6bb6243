//! Read-only knowledge base of typed support resources.
//!
//! Loaded once at startup, either from the dataset bundled into the binary or
//! from a JSON file, then shared by reference across triage turns.

pub mod loader;
pub mod store;

use thiserror::Error;

pub use loader::KnowledgeBaseSource;
pub use store::KnowledgeBase;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse knowledge base {0}: {1}")]
    Parse(String, String),

    #[error("Malformed knowledge base entry #{index}: missing or empty '{field}'")]
    MalformedEntry { index: usize, field: &'static str },
}
