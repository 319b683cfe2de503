//! Unsplash Provider
//!
//! Stock-photo lookup with two modes: a zero-configuration source-URL
//! template that always yields a URL, and an authenticated search against
//! the Unsplash API that degrades to "no result" on any failure.

use async_trait::async_trait;

use super::providers::AssetProvider;
use crate::core::CoreResult;
#[cfg(feature = "http-providers")]
use crate::core::CoreError;

#[cfg(feature = "http-providers")]
use serde::Deserialize;

/// Unsplash stock-photo provider
pub struct UnsplashProvider {
    /// API access key for authenticated search
    access_key: Option<String>,
    /// Base URL for API requests
    #[allow(dead_code)]
    api_url: String,
    /// HTTP client
    #[cfg(feature = "http-providers")]
    client: reqwest::Client,
}

impl UnsplashProvider {
    /// Default Unsplash API base URL
    pub const DEFAULT_API_URL: &'static str = "https://api.unsplash.com";

    /// Base URL of the unauthenticated source-URL service
    pub const SOURCE_URL: &'static str = "https://source.unsplash.com";

    /// Creates a new provider; `access_key` enables the search mode
    pub fn new(access_key: Option<String>) -> CoreResult<Self> {
        #[cfg(feature = "http-providers")]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            access_key,
            api_url: Self::DEFAULT_API_URL.to_string(),
            #[cfg(feature = "http-providers")]
            client,
        })
    }

    /// Creates a provider from the `UNSPLASH_ACCESS_KEY` environment variable
    pub fn from_env() -> CoreResult<Self> {
        Self::new(std::env::var("UNSPLASH_ACCESS_KEY").ok())
    }

    /// Zero-configuration mode: a source-URL template that requires no
    /// authentication and always yields a URL (content relevance is up to
    /// the service).
    pub fn source_url(description: &str, width: u32, height: u32) -> String {
        format!(
            "{}/{}x{}/?{}",
            Self::SOURCE_URL,
            width,
            height,
            urlencoding::encode(description)
        )
    }

    /// Authenticated search mode: returns the first matching photo URL, or
    /// `None` when unconfigured, on network errors, or for an empty result
    /// set. Never propagates a lookup failure.
    #[cfg(feature = "http-providers")]
    pub async fn search(&self, query: &str) -> CoreResult<Option<String>> {
        let Some(access_key) = &self.access_key else {
            tracing::debug!("Unsplash search skipped: no access key configured");
            return Ok(None);
        };

        let url = format!("{}/search/photos", self.api_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("per_page", "1")])
            .header("Authorization", format!("Client-ID {}", access_key))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Unsplash search request failed: {}", e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Unsplash search returned status {}", response.status());
            return Ok(None);
        }

        let body: SearchResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Unsplash search response unreadable: {}", e);
                return Ok(None);
            }
        };

        Ok(body.results.into_iter().next().map(|r| r.urls.regular))
    }

    /// Search mode stub: without the `http-providers` feature every search
    /// is a miss, so callers fall through to their next strategy.
    #[cfg(not(feature = "http-providers"))]
    pub async fn search(&self, _query: &str) -> CoreResult<Option<String>> {
        tracing::debug!("Unsplash search skipped: http-providers feature not enabled");
        Ok(None)
    }
}

#[async_trait]
impl AssetProvider for UnsplashProvider {
    fn name(&self) -> &str {
        "unsplash"
    }

    fn is_available(&self) -> bool {
        self.access_key.is_some()
    }

    async fn resolve(
        &self,
        description: &str,
        _width: u32,
        _height: u32,
    ) -> CoreResult<Option<String>> {
        self.search(description).await
    }
}

// =============================================================================
// Unsplash API Types
// =============================================================================

#[cfg(feature = "http-providers")]
#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[cfg(feature = "http-providers")]
#[derive(Deserialize)]
struct SearchResult {
    urls: PhotoUrls,
}

#[cfg(feature = "http-providers")]
#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_escapes_description() {
        let url = UnsplashProvider::source_url("modern tech office", 800, 600);
        assert_eq!(
            url,
            "https://source.unsplash.com/800x600/?modern%20tech%20office"
        );
    }

    #[test]
    fn test_availability_tracks_access_key() {
        let unconfigured = UnsplashProvider::new(None).unwrap();
        assert!(!unconfigured.is_available());

        let configured = UnsplashProvider::new(Some("key-123".to_string())).unwrap();
        assert!(configured.is_available());
    }

    #[tokio::test]
    async fn test_search_without_key_is_a_miss() {
        let provider = UnsplashProvider::new(None).unwrap();
        assert_eq!(provider.search("office").await.unwrap(), None);
    }
}
