//! Test helpers for result builder tests
//!
//! This module provides mock implementations of the portal collaborator
//! contracts, so builders can be tested without a running portal.

pub mod mock_collaborators;

pub use mock_collaborators::*;

use vitrine_core::models::IndexedDocument;

/// Build an indexed document from field name/value pairs
pub fn indexed_document(pairs: &[(&str, &str)]) -> IndexedDocument {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
