//! Mock collaborator implementations for testing
//!
//! These mocks stand in for the portal services behind the collaborator
//! traits. State sits behind `Arc`, so clones held by a test observe the
//! calls made through a builder.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vitrine_core::models::{FileEntry, StructureDescriptor, ViewerContext};
use vitrine_core::FormatError;
use vitrine_portal::{
    DocumentRepository, PortalResult, PortalUrls, StructureDirectory, ThumbnailResolver,
};

/// Mock content repository backed by a map of file entries
#[derive(Clone, Default)]
pub struct MockDocumentRepository {
    entries: Arc<Mutex<HashMap<i64, FileEntry>>>,
}

impl MockDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&self, entry: FileEntry) {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.file_entry_id, entry);
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn file_entry(&self, primary_key: i64) -> PortalResult<FileEntry> {
        self.entries
            .lock()
            .unwrap()
            .get(&primary_key)
            .cloned()
            .ok_or_else(|| {
                FormatError::NotFound(format!("File entry {} does not exist", primary_key))
            })
    }
}

/// Mock thumbnail resolver returning a derived URL, or an injected failure
#[derive(Clone, Default)]
pub struct MockThumbnailResolver {
    fail: bool,
}

impl MockThumbnailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver whose every call fails with `Render`
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ThumbnailResolver for MockThumbnailResolver {
    async fn thumbnail_url(
        &self,
        entry: &FileEntry,
        _viewer: &ViewerContext,
    ) -> PortalResult<String> {
        if self.fail {
            return Err(FormatError::Render(
                "thumbnail generation failed".to_string(),
            ));
        }
        Ok(format!(
            "http://portal.test/thumbs/{}.png",
            entry.file_entry_id
        ))
    }
}

/// Mock structure directory that counts lookups
///
/// The lookup counter is how tests pin the single-initialization property of
/// the structure-id cache.
#[derive(Clone, Default)]
pub struct MockStructureDirectory {
    structures: Arc<Mutex<HashMap<String, StructureDescriptor>>>,
    lookups: Arc<AtomicUsize>,
}

impl MockStructureDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_structure(&self, descriptor: StructureDescriptor) {
        self.structures
            .lock()
            .unwrap()
            .insert(descriptor.structure_key.clone(), descriptor);
    }

    /// Number of directory lookups performed so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructureDirectory for MockStructureDirectory {
    async fn structure_by_key(&self, key: &str) -> PortalResult<StructureDescriptor> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.structures
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| {
                FormatError::NotFound(format!("No metadata structure with key '{}'", key))
            })
    }
}

/// Portal URL provider returning a fixed base URL
#[derive(Clone)]
pub struct StaticPortalUrls {
    base_url: String,
}

impl StaticPortalUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl PortalUrls for StaticPortalUrls {
    fn base_url(&self, _viewer: &ViewerContext) -> String {
        self.base_url.clone()
    }
}
