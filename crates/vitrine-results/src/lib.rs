//! Vitrine Results
//!
//! This crate provides the result-building layer: per-entry-class builders
//! that turn raw indexed documents into UI-facing display cards, a registry
//! dispatching search hits to the builder for their entry class, and the
//! process-wide structure-id cache behind dynamic image-metadata fields.

pub mod builder;
pub mod file_entry;
pub mod registry;
pub mod structure;
pub mod test_helpers;

// Re-export commonly used types
pub use builder::ResultItemBuilder;
pub use file_entry::{FileEntryBuilder, FILE_ENTRY_CLASS};
pub use registry::BuilderRegistry;
pub use structure::StructureIdCache;
