//! Placeholder Provider
//!
//! Terminal provider in every resolution chain. Builds deterministic
//! placeholder-service URLs from the target dimensions and description,
//! needs no network access, and never misses.

use async_trait::async_trait;

use super::providers::AssetProvider;
use crate::core::CoreResult;

/// Offline placeholder-image provider
#[derive(Debug, Clone, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    /// Creates a new provider
    pub fn new() -> Self {
        Self
    }

    /// Builds a placeholder URL for the given dimensions and description.
    /// The description is truncated to 50 characters and URL-escaped.
    pub fn image_url(description: &str, width: u32, height: u32) -> String {
        let short: String = description.chars().take(50).collect();
        format!(
            "https://placehold.co/{}x{}/e5e7eb/1f2937?text={}",
            width,
            height,
            urlencoding::encode(&short)
        )
    }
}

#[async_trait]
impl AssetProvider for PlaceholderProvider {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn resolve(
        &self,
        description: &str,
        width: u32,
        height: u32,
    ) -> CoreResult<Option<String>> {
        Ok(Some(Self::image_url(description, width, height)))
    }
}

// =============================================================================
// Tests
// =============================================================================
