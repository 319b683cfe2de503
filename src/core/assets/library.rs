//! Curated Asset Library
//!
//! Fixed, pre-populated lookup of brand assets on a configurable CDN:
//! logos by variant name, social icons by platform name, banners by kind.
//! Lookups are pure and offline; a miss is `None`, never an error.

use std::collections::HashMap;

/// Curated brand-asset catalog
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    base_url: String,
    logos: HashMap<String, String>,
    social: HashMap<String, String>,
    banners: HashMap<String, String>,
}

impl AssetLibrary {
    /// Default CDN base URL used when none is configured
    pub const DEFAULT_BASE_URL: &'static str = "https://your-cdn.com/assets";

    /// Creates a library with the standard catalog under the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base = base_url.trim_end_matches('/').to_string();

        let logos = HashMap::from([
            ("primary".to_string(), format!("{base}/logo-primary.png")),
            ("white".to_string(), format!("{base}/logo-white.png")),
            ("icon".to_string(), format!("{base}/logo-icon.png")),
        ]);
        let social = HashMap::from([
            ("facebook".to_string(), format!("{base}/social/facebook.png")),
            ("twitter".to_string(), format!("{base}/social/twitter.png")),
            (
                "instagram".to_string(),
                format!("{base}/social/instagram.png"),
            ),
            ("linkedin".to_string(), format!("{base}/social/linkedin.png")),
        ]);
        let banners = HashMap::from([
            ("hero".to_string(), format!("{base}/banners/hero.jpg")),
            ("promo".to_string(), format!("{base}/banners/promo.jpg")),
        ]);

        Self {
            base_url,
            logos,
            social,
            banners,
        }
    }

    /// Creates a library with no entries at all
    pub fn empty(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            logos: HashMap::new(),
            social: HashMap::new(),
            banners: HashMap::new(),
        }
    }

    /// Adds or replaces a logo variant
    pub fn with_logo(mut self, variant: impl Into<String>, url: impl Into<String>) -> Self {
        self.logos.insert(variant.into(), url.into());
        self
    }

    /// Adds or replaces a social icon
    pub fn with_social_icon(
        mut self,
        platform: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.social.insert(platform.into().to_lowercase(), url.into());
        self
    }

    /// Adds or replaces a banner
    pub fn with_banner(mut self, kind: impl Into<String>, url: impl Into<String>) -> Self {
        self.banners.insert(kind.into(), url.into());
        self
    }

    /// The configured CDN base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up a logo variant, falling back to the primary logo for
    /// unknown variants
    pub fn logo(&self, variant: &str) -> Option<String> {
        self.logos
            .get(variant)
            .or_else(|| self.logos.get("primary"))
            .cloned()
    }

    /// Looks up a social icon by platform name (case-insensitive)
    pub fn social_icon(&self, platform: &str) -> Option<String> {
        self.social.get(&platform.to_lowercase()).cloned()
    }

    /// Looks up a banner by kind
    pub fn banner(&self, kind: &str) -> Option<String> {
        self.banners.get(kind).cloned()
    }
}

impl Default for AssetLibrary {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Tests
// =============================================================================
