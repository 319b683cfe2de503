//! Asset Providers
//!
//! Provider abstraction for image-asset resolution services.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::CoreResult;

// =============================================================================
// Resolution Policy
// =============================================================================

/// Policy selecting which provider chain resolves generic image references
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStrategy {
    /// Unsplash source-URL templates (zero configuration)
    Unsplash,
    /// DALL-E generation for AI-requested images, stock search otherwise
    Dalle,
    /// Offline placeholder URLs only
    Placeholder,
    /// Authenticated stock search with placeholder fallback
    #[default]
    Mixed,
}

impl std::fmt::Display for AssetStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetStrategy::Unsplash => write!(f, "unsplash"),
            AssetStrategy::Dalle => write!(f, "dalle"),
            AssetStrategy::Placeholder => write!(f, "placeholder"),
            AssetStrategy::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for AssetStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsplash" => Ok(AssetStrategy::Unsplash),
            "dalle" => Ok(AssetStrategy::Dalle),
            "placeholder" => Ok(AssetStrategy::Placeholder),
            "mixed" => Ok(AssetStrategy::Mixed),
            _ => Err(format!("Unknown asset strategy: {}", s)),
        }
    }
}

// =============================================================================
// Provider Trait
// =============================================================================

/// Trait for image-asset providers (stock photos, generative services,
/// placeholder generators).
///
/// `Ok(None)` means the provider produced no result for this description;
/// the caller decides whether to fall through to the next provider in the
/// chain. Only errors worth surfacing (bad configuration) should be `Err`.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Returns the provider name
    fn name(&self) -> &str;

    /// Checks if the provider is configured well enough to attempt a lookup
    fn is_available(&self) -> bool {
        true
    }

    /// Maps a description and target dimensions to an image URL
    async fn resolve(
        &self,
        description: &str,
        width: u32,
        height: u32,
    ) -> CoreResult<Option<String>>;
}

// =============================================================================
// Mock Provider for Testing
// =============================================================================

/// Mock provider that counts invocations and answers with a deterministic
/// URL derived from the description
#[derive(Debug)]
pub struct MockAssetProvider {
    name: String,
    base_url: String,
    yields_result: bool,
    calls: AtomicUsize,
}

impl MockAssetProvider {
    /// Creates a new mock provider
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            base_url: format!("https://mock.test/{}", name),
            name,
            yields_result: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes every lookup return "no result"
    pub fn with_no_result(mut self) -> Self {
        self.yields_result = false;
        self
    }

    /// Number of resolve calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetProvider for MockAssetProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn resolve(
        &self,
        description: &str,
        width: u32,
        height: u32,
    ) -> CoreResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.yields_result {
            return Ok(None);
        }

        Ok(Some(format!(
            "{}/{}x{}/{}",
            self.base_url,
            width,
            height,
            urlencoding::encode(description)
        )))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip() {
        for strategy in [
            AssetStrategy::Unsplash,
            AssetStrategy::Dalle,
            AssetStrategy::Placeholder,
            AssetStrategy::Mixed,
        ] {
            let parsed: AssetStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }

        assert!("midjourney".parse::<AssetStrategy>().is_err());
    }

    #[test]
    fn test_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&AssetStrategy::Mixed).unwrap(),
            "\"mixed\""
        );
        assert_eq!(
            serde_json::from_str::<AssetStrategy>("\"dalle\"").unwrap(),
            AssetStrategy::Dalle
        );
    }

    #[tokio::test]
    async fn test_mock_provider_counts_calls() {
        let provider = MockAssetProvider::new("stock");

        let url = provider.resolve("team office", 800, 600).await.unwrap();
        assert_eq!(
            url.as_deref(),
            Some("https://mock.test/stock/800x600/team%20office")
        );

        provider.resolve("second", 800, 600).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_provider_no_result() {
        let provider = MockAssetProvider::new("stock").with_no_result();
        assert_eq!(provider.resolve("x", 100, 100).await.unwrap(), None);
        assert_eq!(provider.call_count(), 1);
    }
}
