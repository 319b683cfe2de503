//! DALL-E Provider
//!
//! Generative image lookup via the OpenAI images API. The requested size
//! is an aspect class derived from the target dimensions. Generation
//! failures never propagate: the provider answers with a deterministic
//! placeholder URL embedding the (truncated, escaped) description.

use async_trait::async_trait;

use super::providers::AssetProvider;
use crate::core::CoreResult;
#[cfg(feature = "http-providers")]
use crate::core::CoreError;

#[cfg(feature = "http-providers")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Aspect Classes
// =============================================================================

/// Image sizes the generation service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DalleImageSize {
    /// 1024x1024
    Square,
    /// 1792x1024
    Landscape,
    /// 1024x1792
    Portrait,
}

impl DalleImageSize {
    /// Picks the aspect class for target dimensions: ratio > 1.5 is
    /// landscape, ratio < 0.7 is portrait, anything else is square.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if height == 0 {
            return DalleImageSize::Square;
        }
        let ratio = width as f64 / height as f64;
        if ratio > 1.5 {
            DalleImageSize::Landscape
        } else if ratio < 0.7 {
            DalleImageSize::Portrait
        } else {
            DalleImageSize::Square
        }
    }

    /// The wire value the API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            DalleImageSize::Square => "1024x1024",
            DalleImageSize::Landscape => "1792x1024",
            DalleImageSize::Portrait => "1024x1792",
        }
    }
}

// =============================================================================
// DALL-E Provider
// =============================================================================

/// OpenAI DALL-E image-generation provider
pub struct DalleProvider {
    /// API key; generation is skipped without one
    api_key: Option<String>,
    /// Base URL for API requests
    #[allow(dead_code)]
    base_url: String,
    /// Model to use
    #[allow(dead_code)]
    model: String,
    /// Quality tier ("standard" or "hd")
    #[allow(dead_code)]
    quality: String,
    /// HTTP client
    #[cfg(feature = "http-providers")]
    client: reqwest::Client,
}

impl DalleProvider {
    /// Default OpenAI API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Default image model
    pub const DEFAULT_MODEL: &'static str = "dall-e-3";

    /// Creates a new provider
    pub fn new(api_key: Option<String>) -> CoreResult<Self> {
        #[cfg(feature = "http-providers")]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            quality: "standard".to_string(),
            #[cfg(feature = "http-providers")]
            client,
        })
    }

    /// Creates a provider from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> CoreResult<Self> {
        Self::new(std::env::var("OPENAI_API_KEY").ok())
    }

    /// Sets the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the quality tier
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    /// Deterministic offline fallback: a placeholder URL carrying the
    /// first 30 characters of the description, URL-escaped.
    pub fn fallback_url(description: &str) -> String {
        let short: String = description.chars().take(30).collect();
        format!(
            "https://placehold.co/800x600/2563eb/white?text={}",
            urlencoding::encode(&short)
        )
    }

    /// Generates an image and returns its URL. Total: any failure (no
    /// key, network error, empty response) yields the fallback URL.
    #[cfg(feature = "http-providers")]
    pub async fn generate(&self, description: &str, width: u32, height: u32) -> String {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("DALL-E generation skipped: no API key configured");
            return Self::fallback_url(description);
        };

        let size = DalleImageSize::from_dimensions(width, height);
        let api_request = ImageRequest {
            model: self.model.clone(),
            prompt: description.to_string(),
            size: size.as_str().to_string(),
            quality: self.quality.clone(),
            n: 1,
        };

        let url = format!("{}/images/generations", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("DALL-E request failed: {}", e);
                return Self::fallback_url(description);
            }
        };

        if !response.status().is_success() {
            tracing::warn!("DALL-E request returned status {}", response.status());
            return Self::fallback_url(description);
        }

        let body: ImageResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("DALL-E response unreadable: {}", e);
                return Self::fallback_url(description);
            }
        };

        match body.data.into_iter().next() {
            Some(image) => image.url,
            None => {
                tracing::warn!("DALL-E returned no images for prompt");
                Self::fallback_url(description)
            }
        }
    }

    /// Generation stub: without the `http-providers` feature every request
    /// answers with the offline fallback URL.
    #[cfg(not(feature = "http-providers"))]
    pub async fn generate(&self, description: &str, _width: u32, _height: u32) -> String {
        tracing::debug!("DALL-E generation skipped: http-providers feature not enabled");
        Self::fallback_url(description)
    }
}

#[async_trait]
impl AssetProvider for DalleProvider {
    fn name(&self) -> &str {
        "dalle"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn resolve(
        &self,
        description: &str,
        width: u32,
        height: u32,
    ) -> CoreResult<Option<String>> {
        Ok(Some(self.generate(description, width, height).await))
    }
}

// =============================================================================
// OpenAI Images API Types
// =============================================================================

#[cfg(feature = "http-providers")]
#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    size: String,
    quality: String,
    n: u32,
}

#[cfg(feature = "http-providers")]
#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<GeneratedImage>,
}

#[cfg(feature = "http-providers")]
#[derive(Deserialize)]
struct GeneratedImage {
    url: String,
}

// =============================================================================
// Tests
// =============================================================================
