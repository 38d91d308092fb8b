//! Portal collaborator contracts
//!
//! This module defines the traits the result-building layer depends on. The
//! formatter takes these as injected interface values, so tests and embedders
//! can substitute implementations freely. Failures propagate to the caller
//! unchanged; none of these contracts retry or fall back.

use async_trait::async_trait;

use vitrine_core::error::FormatError;
use vitrine_core::models::{FileEntry, StructureDescriptor, ViewerContext};

/// Result type for portal collaborator operations
pub type PortalResult<T> = Result<T, FormatError>;

/// Content-repository lookup for indexed files
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Fetch the file entry behind an indexed primary key.
    ///
    /// Fails with `NotFound` when no such entry exists.
    async fn file_entry(&self, primary_key: i64) -> PortalResult<FileEntry>;
}

/// Theming collaborator producing thumbnail references
#[async_trait]
pub trait ThumbnailResolver: Send + Sync {
    /// Resolve the thumbnail URL for a file entry as seen by this viewer.
    ///
    /// Fails with `Render` when the portal cannot produce one.
    async fn thumbnail_url(
        &self,
        entry: &FileEntry,
        viewer: &ViewerContext,
    ) -> PortalResult<String>;
}

/// Directory of metadata-structure definitions
#[async_trait]
pub trait StructureDirectory: Send + Sync {
    /// Find the structure whose key equals `key`.
    ///
    /// An empty directory result fails with `NotFound`; callers never see an
    /// implicit first-element read over a possibly-empty list.
    async fn structure_by_key(&self, key: &str) -> PortalResult<StructureDescriptor>;
}

/// Portal URL resolution
pub trait PortalUrls: Send + Sync {
    /// Base portal URL for this viewer, without a trailing slash.
    fn base_url(&self, viewer: &ViewerContext) -> String;
}
