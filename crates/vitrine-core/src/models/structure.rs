//! Metadata structure model

use serde::{Deserialize, Serialize};

/// A named metadata-structure definition exposed by the portal.
///
/// Structures describe dynamically-typed extracted fields, such as the image
/// width and height written into the index by content-analysis tooling. Only
/// the numeric id is consumed here, to reconstruct dynamic field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureDescriptor {
    pub structure_id: i64,
    pub structure_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
