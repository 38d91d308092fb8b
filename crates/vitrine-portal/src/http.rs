//! Portal HTTP client
//!
//! One reqwest-backed client implementing every collaborator contract against
//! the portal's REST surface. Transport failures and undecodable bodies map
//! to `Backend`; portal-reported misses map to `NotFound` or `Render`
//! depending on the contract.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use vitrine_core::error::FormatError;
use vitrine_core::models::{FileEntry, StructureDescriptor, ViewerContext};
use vitrine_core::PortalConfig;

use crate::traits::{
    DocumentRepository, PortalResult, PortalUrls, StructureDirectory, ThumbnailResolver,
};

#[derive(Debug, Deserialize)]
struct ThumbnailResponse {
    url: String,
}

/// HTTP implementation of the portal collaborator contracts
pub struct PortalClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client for the portal")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        what: &str,
    ) -> PortalResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| FormatError::Backend(format!("Undecodable {} response: {}", what, err)))
    }
}

#[async_trait]
impl DocumentRepository for PortalClient {
    async fn file_entry(&self, primary_key: i64) -> PortalResult<FileEntry> {
        let url = format!("{}/api/file-entries/{}", self.base_url, primary_key);
        debug!(primary_key, "fetching file entry");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| FormatError::Backend(format!("File entry request failed: {}", err)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FormatError::NotFound(format!(
                "File entry {} does not exist",
                primary_key
            )));
        }
        if !status.is_success() {
            warn!(primary_key, %status, "file entry request failed");
            return Err(FormatError::Backend(format!(
                "File entry request returned {}",
                status
            )));
        }

        self.get_json(response, "file entry").await
    }
}

#[async_trait]
impl ThumbnailResolver for PortalClient {
    async fn thumbnail_url(
        &self,
        entry: &FileEntry,
        viewer: &ViewerContext,
    ) -> PortalResult<String> {
        let url = format!(
            "{}/api/file-entries/{}/thumbnail",
            self.base_url, entry.file_entry_id
        );
        debug!(file_entry_id = entry.file_entry_id, "resolving thumbnail");

        let response = self
            .http_client
            .get(&url)
            .query(&[("locale", viewer.locale.as_str())])
            .bearer_auth(&viewer.auth_token)
            .send()
            .await
            .map_err(|err| FormatError::Render(format!("Thumbnail request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(file_entry_id = entry.file_entry_id, %status, "thumbnail request failed");
            return Err(FormatError::Render(format!(
                "Thumbnail for file entry {} returned {}",
                entry.file_entry_id, status
            )));
        }

        let body: ThumbnailResponse = self.get_json(response, "thumbnail").await?;
        Ok(body.url)
    }
}

#[async_trait]
impl StructureDirectory for PortalClient {
    async fn structure_by_key(&self, key: &str) -> PortalResult<StructureDescriptor> {
        let url = format!("{}/api/structures", self.base_url);
        debug!(structure_key = key, "looking up metadata structure");

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await
            .map_err(|err| FormatError::Backend(format!("Structure request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(structure_key = key, %status, "structure request failed");
            return Err(FormatError::Backend(format!(
                "Structure request returned {}",
                status
            )));
        }

        let structures: Vec<StructureDescriptor> = self.get_json(response, "structure").await?;
        structures.into_iter().next().ok_or_else(|| {
            FormatError::NotFound(format!("No metadata structure with key '{}'", key))
        })
    }
}

impl PortalUrls for PortalClient {
    fn base_url(&self, _viewer: &ViewerContext) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> PortalClient {
        PortalClient::new(&PortalConfig::new(server.url())).unwrap()
    }

    fn viewer() -> ViewerContext {
        ViewerContext::new("en_US", "token-123")
    }

    fn entry() -> FileEntry {
        FileEntry {
            file_entry_id: 42,
            group_id: 10,
            title: "photo.png".to_string(),
            mime_type: "image/png".to_string(),
            size: 2048,
            version: None,
        }
    }

    #[tokio::test]
    async fn test_file_entry_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/file-entries/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"file_entry_id":42,"group_id":10,"title":"photo.png",
                   "mime_type":"image/png","size":2048}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let entry = client.file_entry(42).await.unwrap();

        assert_eq!(entry.file_entry_id, 42);
        assert_eq!(entry.title, "photo.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_file_entry_404_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/file-entries/7")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.file_entry(7).await.unwrap_err();

        assert!(matches!(err, FormatError::NotFound(_)));
        assert!(err.to_string().contains('7'));
    }

    #[tokio::test]
    async fn test_file_entry_server_error_is_backend() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/file-entries/7")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.file_entry(7).await.unwrap_err();

        assert!(matches!(err, FormatError::Backend(_)));
    }

    #[tokio::test]
    async fn test_thumbnail_url_sends_locale_and_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/file-entries/42/thumbnail")
            .match_query(mockito::Matcher::UrlEncoded(
                "locale".to_string(),
                "en_US".to_string(),
            ))
            .match_header("authorization", "Bearer token-123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"http://cdn/thumbs/42.png"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let url = client.thumbnail_url(&entry(), &viewer()).await.unwrap();

        assert_eq!(url, "http://cdn/thumbs/42.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_thumbnail_failure_is_render() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/file-entries/42/thumbnail")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.thumbnail_url(&entry(), &viewer()).await.unwrap_err();

        assert!(matches!(err, FormatError::Render(_)));
    }

    #[tokio::test]
    async fn test_structure_by_key_takes_first_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/structures")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".to_string(),
                "TIKARAWMETADATA".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"structure_id":99,"structure_key":"TIKARAWMETADATA"},
                    {"structure_id":100,"structure_key":"TIKARAWMETADATA"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let descriptor = client.structure_by_key("TIKARAWMETADATA").await.unwrap();

        assert_eq!(descriptor.structure_id, 99);
    }

    #[tokio::test]
    async fn test_structure_by_key_empty_result_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/structures")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.structure_by_key("MISSING").await.unwrap_err();

        assert!(matches!(err, FormatError::NotFound(_)));
        assert!(err.to_string().contains("MISSING"));
    }

    #[tokio::test]
    async fn test_base_url_has_no_trailing_slash() {
        let server = mockito::Server::new_async().await;
        let client = PortalClient::new(&PortalConfig::new(format!("{}/", server.url()))).unwrap();
        let base = client.base_url(&viewer());
        assert!(!base.ends_with('/'));
    }
}
