//! File entry model

use serde::{Deserialize, Serialize};

/// A file handle resolved from the portal's content repository.
///
/// Looked up by the indexed primary key; consumed by thumbnail resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub file_entry_id: i64,
    pub group_id: i64,
    pub title: String,
    pub mime_type: String,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
