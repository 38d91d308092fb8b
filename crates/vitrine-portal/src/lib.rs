//! Vitrine Portal Library
//!
//! This crate defines the collaborator contracts Vitrine needs from the host
//! portal platform (content repository, thumbnail theming, metadata-structure
//! directory, URL resolution) and provides an HTTP client implementing all of
//! them against the portal's REST surface.

pub mod http;
pub mod traits;

// Re-export commonly used types
pub use http::PortalClient;
pub use traits::{
    DocumentRepository, PortalResult, PortalUrls, StructureDirectory, ThumbnailResolver,
};
