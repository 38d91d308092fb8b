//! Vitrine Core Library
//!
//! This crate provides core domain models, error types, configuration, and
//! formatting helpers that are shared across all Vitrine components.

pub mod config;
pub mod error;
pub mod format;
pub mod models;

// Re-export commonly used types
pub use config::PortalConfig;
pub use error::FormatError;
pub use format::{humanize_size, translate_mime_type, APPLICATION_PREFIX, IMAGE_PREFIX};
pub use models::{
    FileEntry, IndexedDocument, ResultCard, StructureDescriptor, ViewerContext,
};
