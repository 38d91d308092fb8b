//! Indexed document model
//!
//! A flattened record produced by the search pipeline representing one
//! searchable file and its extracted metadata. Every field value is stored
//! as a string by the index; typed accessors parse on demand.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FormatError;

/// Well-known index field names
pub mod fields {
    pub const SCOPE_GROUP_ID: &str = "scopeGroupId";
    pub const FOLDER_ID: &str = "folderId";
    pub const PATH: &str = "path";
    pub const MIME_TYPE: &str = "mimeType";
    pub const SIZE: &str = "size";
    pub const ENTRY_CLASS_PK: &str = "entryClassPK";
    pub const ENTRY_CLASS_NAME: &str = "entryClassName";
}

/// One record retrieved from the search index.
///
/// Immutable once constructed; the formatter borrows it for the duration of
/// one request. Dynamic per-structure fields sit alongside the well-known
/// ones under their generated names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexedDocument {
    fields: HashMap<String, String>,
}

impl IndexedDocument {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of a field, if the index stored one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a field, reading absent fields as the empty string.
    ///
    /// Link building substitutes raw field values without validation; a
    /// missing field produces a malformed link, not an error.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Value of a field, failing with `NotFound` when the index holds none.
    pub fn require(&self, name: &str) -> Result<&str, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::NotFound(format!("Index field '{}' is missing", name)))
    }

    /// Numeric primary key of the portal entity behind this document.
    pub fn entry_class_pk(&self) -> Result<i64, FormatError> {
        let raw = self.require(fields::ENTRY_CLASS_PK)?;
        raw.parse().map_err(|_| FormatError::InvalidField {
            field: fields::ENTRY_CLASS_PK.to_string(),
            value: raw.to_string(),
        })
    }

    /// Byte size of the indexed file.
    pub fn size_bytes(&self) -> Result<u64, FormatError> {
        let raw = self.require(fields::SIZE)?;
        raw.parse().map_err(|_| FormatError::InvalidField {
            field: fields::SIZE.to_string(),
            value: raw.to_string(),
        })
    }

    /// Indexed entry class of this document, used for builder dispatch.
    pub fn entry_class_name(&self) -> Option<&str> {
        self.get(fields::ENTRY_CLASS_NAME)
    }
}

impl FromIterator<(String, String)> for IndexedDocument {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
