//! Builder registry for dispatching indexed entry classes
//!
//! The search-result rendering pipeline looks up the builder for each hit's
//! entry class here, once per result item per rendered response.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use vitrine_core::FormatError;
use vitrine_portal::PortalResult;

use crate::builder::ResultItemBuilder;

/// Registry mapping indexed entry classes to their result item builders.
///
/// Thread-safe and async-compatible using tokio's RwLock. Registration
/// typically happens once at startup; concurrent lookups read without
/// blocking each other.
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: Arc<RwLock<HashMap<String, Arc<dyn ResultItemBuilder>>>>,
}

impl BuilderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            builders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a builder under its entry class
    pub async fn register(&self, builder: Arc<dyn ResultItemBuilder>) {
        let entry_class = builder.entry_class().to_string();
        self.builders.write().await.insert(entry_class, builder);
    }

    /// Get the builder for an entry class
    ///
    /// Unknown entry classes are a `NotFound` error; the caller decides
    /// whether to skip the hit or fail the page.
    pub async fn get(&self, entry_class: &str) -> PortalResult<Arc<dyn ResultItemBuilder>> {
        self.builders
            .read()
            .await
            .get(entry_class)
            .cloned()
            .ok_or_else(|| {
                FormatError::NotFound(format!(
                    "No result builder for entry class '{}'",
                    entry_class
                ))
            })
    }

    /// Check if a builder is registered for an entry class
    pub async fn contains(&self, entry_class: &str) -> bool {
        self.builders.read().await.contains_key(entry_class)
    }

    /// List all registered entry classes
    pub async fn entry_classes(&self) -> Vec<String> {
        self.builders.read().await.keys().cloned().collect()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vitrine_core::models::{IndexedDocument, ViewerContext};

    // Minimal builder for registry tests
    struct StubBuilder {
        entry_class: String,
    }

    impl StubBuilder {
        fn new(entry_class: impl Into<String>) -> Self {
            Self {
                entry_class: entry_class.into(),
            }
        }
    }

    #[async_trait]
    impl ResultItemBuilder for StubBuilder {
        fn entry_class(&self) -> &str {
            &self.entry_class
        }

        fn link(&self, _document: &IndexedDocument, _viewer: &ViewerContext) -> String {
            "http://host/stub".to_string()
        }

        async fn image_src(
            &self,
            _document: &IndexedDocument,
            _viewer: &ViewerContext,
        ) -> PortalResult<String> {
            Ok("http://host/stub.png".to_string())
        }

        async fn metadata(
            &self,
            _document: &IndexedDocument,
            _viewer: &ViewerContext,
        ) -> PortalResult<HashMap<String, String>> {
            Ok(HashMap::new())
        }
    }

    #[tokio::test]
    async fn test_new_registry_is_empty() {
        let registry = BuilderRegistry::new();
        assert!(registry.entry_classes().await.is_empty());
        assert!(!registry.contains("file_entry").await);
    }

    #[tokio::test]
    async fn test_register_and_get_builder() {
        let registry = BuilderRegistry::new();
        registry
            .register(Arc::new(StubBuilder::new("file_entry")))
            .await;

        assert!(registry.contains("file_entry").await);
        let builder = registry.get("file_entry").await.unwrap();
        assert_eq!(builder.entry_class(), "file_entry");
    }

    #[tokio::test]
    async fn test_get_unknown_entry_class_is_not_found() {
        let registry = BuilderRegistry::new();
        let err = registry.get("bookmark").await.err().unwrap();
        assert!(matches!(err, FormatError::NotFound(_)));
        assert!(err.to_string().contains("bookmark"));
    }

    #[tokio::test]
    async fn test_entry_classes_lists_registrations() {
        let registry = BuilderRegistry::new();
        registry
            .register(Arc::new(StubBuilder::new("file_entry")))
            .await;
        registry
            .register(Arc::new(StubBuilder::new("journal_article")))
            .await;

        let mut classes = registry.entry_classes().await;
        classes.sort();
        assert_eq!(classes, vec!["file_entry", "journal_article"]);
    }

    #[tokio::test]
    async fn test_clone_shares_registrations() {
        let registry = BuilderRegistry::new();
        registry
            .register(Arc::new(StubBuilder::new("file_entry")))
            .await;

        let cloned = registry.clone();
        assert!(cloned.contains("file_entry").await);
    }
}
