//! Structure id cache
//!
//! The dynamic image-metadata fields in the index are named by the numeric
//! id of a fixed metadata structure. That id is resolved once per process
//! and memoized; concurrent first callers share a single directory lookup.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use vitrine_portal::{PortalResult, StructureDirectory};

/// Lazily-initialized, process-wide memo of a structure id.
///
/// Cloning shares the underlying cell, so every builder handed a clone
/// observes the same cached value.
#[derive(Clone)]
pub struct StructureIdCache {
    inner: Arc<OnceCell<i64>>,
}

impl StructureIdCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(OnceCell::new()),
        }
    }

    /// The cached structure id, running the directory lookup at most once.
    ///
    /// Concurrent first callers are serialized on the cell; exactly one of
    /// them performs the lookup and all observe its result. A failed lookup
    /// caches nothing, so the next caller retries.
    pub async fn get_or_load(
        &self,
        directory: &dyn StructureDirectory,
        key: &str,
    ) -> PortalResult<i64> {
        self.inner
            .get_or_try_init(|| async {
                debug!(structure_key = key, "resolving structure id");
                let descriptor = directory.structure_by_key(key).await?;
                Ok(descriptor.structure_id)
            })
            .await
            .copied()
    }
}

impl Default for StructureIdCache {
    fn default() -> Self {
        Self::new()
    }
}
