//! Result item builder abstraction
//!
//! This module provides the abstraction layer for result builders, keeping
//! per-entry-class formatting separate from the dispatch machinery. One
//! builder exists per indexed entry class; the registry routes each search
//! hit to the builder registered for its class.

use std::collections::HashMap;

use async_trait::async_trait;

use vitrine_core::models::{IndexedDocument, ResultCard, ViewerContext};
use vitrine_portal::PortalResult;

/// Trait that all result item builders must implement
#[async_trait]
pub trait ResultItemBuilder: Send + Sync {
    /// Indexed entry class this builder formats
    fn entry_class(&self) -> &str;

    /// Link opening the underlying entity in the portal.
    ///
    /// Pure concatenation of raw field values. The caller guarantees the
    /// fields are present and URL-safe; a missing field yields a malformed
    /// link, not an error.
    fn link(&self, document: &IndexedDocument, viewer: &ViewerContext) -> String;

    /// Thumbnail reference for this result, as seen by the viewer.
    async fn image_src(
        &self,
        document: &IndexedDocument,
        viewer: &ViewerContext,
    ) -> PortalResult<String>;

    /// Label to formatted value metadata for this result.
    async fn metadata(
        &self,
        document: &IndexedDocument,
        viewer: &ViewerContext,
    ) -> PortalResult<HashMap<String, String>>;

    /// Assemble the full display card for one search hit.
    ///
    /// Failures from the thumbnail and metadata paths propagate unchanged;
    /// recovery policy (placeholder, omission, aborting the page) belongs to
    /// the rendering pipeline.
    async fn build_card(
        &self,
        document: &IndexedDocument,
        viewer: &ViewerContext,
    ) -> PortalResult<ResultCard> {
        let link = self.link(document, viewer);
        let image_src = self.image_src(document, viewer).await?;
        let metadata = self.metadata(document, viewer).await?;

        Ok(ResultCard {
            link,
            image_src: Some(image_src),
            metadata,
        })
    }
}
