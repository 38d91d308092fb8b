//! Display card model
//!
//! The formatter's output: the UI-facing projection of one search result.

use serde::Serialize;
use std::collections::HashMap;

/// Labels used in the metadata mapping of a result card
pub mod metadata_keys {
    pub const FORMAT: &str = "format";
    pub const SIZE: &str = "size";
    pub const DIMENSIONS: &str = "dimensions";
}

/// UI-facing projection of one search result, created fresh per call.
///
/// `metadata` always carries `format` and `size` entries for documents that
/// indexed a MIME type and byte size, and a `dimensions` entry exactly when
/// the MIME type belongs to the image category.
#[derive(Debug, Clone, Serialize)]
pub struct ResultCard {
    /// Link opening the underlying file in the portal
    pub link: String,
    /// Thumbnail reference, when one could be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    /// Label to formatted value; insertion order is irrelevant
    pub metadata: HashMap<String, String>,
}
