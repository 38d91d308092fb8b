//! File entry result builder
//!
//! Formats indexed file documents into display fields: the open link, the
//! thumbnail reference, and human-readable metadata (format code, humanized
//! size, and image dimensions for image MIME types).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use vitrine_core::format::{humanize_size, translate_mime_type, IMAGE_PREFIX};
use vitrine_core::models::display::metadata_keys;
use vitrine_core::models::document::fields;
use vitrine_core::models::{IndexedDocument, ViewerContext};
use vitrine_portal::{
    DocumentRepository, PortalResult, PortalUrls, StructureDirectory, ThumbnailResolver,
};

use crate::builder::ResultItemBuilder;
use crate::structure::StructureIdCache;

/// Entry class of indexed portal file entries
pub const FILE_ENTRY_CLASS: &str = "file_entry";

const RAW_METADATA_WIDTH_KEY: &str = "WIDTH";
const RAW_METADATA_LENGTH_KEY: &str = "LENGTH";

/// Index name of a dynamic raw-metadata field.
///
/// The index pipeline writes extracted image metadata under names combining
/// the owning structure id, the metadata key, and the document locale.
fn raw_metadata_field(structure_id: i64, key: &str, locale: &str) -> String {
    format!(
        "ddm__text__{}__TIFF_IMAGE_{}_{}_sortable",
        structure_id, key, locale
    )
}

/// Result builder for indexed file entries
pub struct FileEntryBuilder {
    repository: Arc<dyn DocumentRepository>,
    thumbnails: Arc<dyn ThumbnailResolver>,
    directory: Arc<dyn StructureDirectory>,
    urls: Arc<dyn PortalUrls>,
    structure_ids: StructureIdCache,
    structure_key: String,
}

impl FileEntryBuilder {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        thumbnails: Arc<dyn ThumbnailResolver>,
        directory: Arc<dyn StructureDirectory>,
        urls: Arc<dyn PortalUrls>,
        structure_key: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            thumbnails,
            directory,
            urls,
            structure_ids: StructureIdCache::new(),
            structure_key: structure_key.into(),
        }
    }

    /// Formatted image dimensions from the dynamic raw-metadata fields.
    ///
    /// Either field being absent from the document is a `NotFound` error;
    /// no partial dimensions value is ever emitted.
    async fn image_dimensions(
        &self,
        document: &IndexedDocument,
        locale: &str,
    ) -> PortalResult<String> {
        let structure_id = self
            .structure_ids
            .get_or_load(self.directory.as_ref(), &self.structure_key)
            .await?;

        let width_field = raw_metadata_field(structure_id, RAW_METADATA_WIDTH_KEY, locale);
        let length_field = raw_metadata_field(structure_id, RAW_METADATA_LENGTH_KEY, locale);

        let width = document.require(&width_field)?;
        let length = document.require(&length_field)?;

        Ok(format!("{} x {} px", width, length))
    }
}

#[async_trait]
impl ResultItemBuilder for FileEntryBuilder {
    fn entry_class(&self) -> &str {
        FILE_ENTRY_CLASS
    }

    fn link(&self, document: &IndexedDocument, viewer: &ViewerContext) -> String {
        format!(
            "{}/documents/{}/{}/{}",
            self.urls.base_url(viewer),
            document.get_or_empty(fields::SCOPE_GROUP_ID),
            document.get_or_empty(fields::FOLDER_ID),
            document.get_or_empty(fields::PATH),
        )
    }

    async fn image_src(
        &self,
        document: &IndexedDocument,
        viewer: &ViewerContext,
    ) -> PortalResult<String> {
        let primary_key = document.entry_class_pk()?;
        let entry = self.repository.file_entry(primary_key).await?;
        self.thumbnails.thumbnail_url(&entry, viewer).await
    }

    async fn metadata(
        &self,
        document: &IndexedDocument,
        viewer: &ViewerContext,
    ) -> PortalResult<HashMap<String, String>> {
        let mime_type = document.require(fields::MIME_TYPE)?;
        let size = document.size_bytes()?;

        let mut metadata = HashMap::new();
        metadata.insert(
            metadata_keys::FORMAT.to_string(),
            translate_mime_type(mime_type),
        );
        metadata.insert(metadata_keys::SIZE.to_string(), humanize_size(size));

        if mime_type.starts_with(IMAGE_PREFIX) {
            let dimensions = self.image_dimensions(document, &viewer.locale).await?;
            metadata.insert(metadata_keys::DIMENSIONS.to_string(), dimensions);
        }

        Ok(metadata)
    }
}
