//! Asset Resolver
//!
//! Walks a validated document depth-first (row, then column, then module
//! order), classifies every image reference by prefix convention, resolves
//! it through the configured provider chain, rewrites the module's source
//! field in place, and accumulates a reference-to-URL audit report.
//!
//! Resolution is memoized per raw reference string within one traversal,
//! so each unique reference invokes its provider at most once and repeated
//! occurrences share the first-seen URL.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dalle::DalleProvider;
use super::library::AssetLibrary;
use super::placeholder::PlaceholderProvider;
use super::providers::{AssetProvider, AssetStrategy};
use super::unsplash::UnsplashProvider;
use crate::core::document::{Document, Module};
use crate::core::{CoreError, CoreResult};

/// Dimensions assumed when an image reference carries no size information
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

// =============================================================================
// Configuration
// =============================================================================

/// Resolver configuration: strategy policy plus provider credentials
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Policy for generic image references
    pub strategy: AssetStrategy,
    /// Unsplash access key for authenticated stock search
    pub unsplash_access_key: Option<String>,
    /// OpenAI API key for generative images
    pub openai_api_key: Option<String>,
    /// Base URL of the curated asset CDN
    pub library_base_url: Option<String>,
}

impl ResolverConfig {
    /// Creates a config with the default mixed strategy and no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads strategy and credentials from the environment
    /// (`ASSET_STRATEGY`, `UNSPLASH_ACCESS_KEY`, `OPENAI_API_KEY`,
    /// `ASSET_LIBRARY_URL`). An unrecognized strategy value falls back to
    /// the default.
    pub fn from_env() -> Self {
        let strategy = std::env::var("ASSET_STRATEGY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            strategy,
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            library_base_url: std::env::var("ASSET_LIBRARY_URL").ok(),
        }
    }

    /// Sets the resolution strategy
    pub fn with_strategy(mut self, strategy: AssetStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the Unsplash access key
    pub fn with_unsplash_access_key(mut self, key: impl Into<String>) -> Self {
        self.unsplash_access_key = Some(key.into());
        self
    }

    /// Sets the OpenAI API key
    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Sets the curated-library CDN base URL
    pub fn with_library_base_url(mut self, url: impl Into<String>) -> Self {
        self.library_base_url = Some(url.into());
        self
    }
}

// =============================================================================
// Audit Report
// =============================================================================

/// Audit artifact of one resolution pass: each unique raw reference mapped
/// to the URL it resolved to, with the first-seen value kept for repeats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    /// Number of unique references resolved
    pub count: usize,
    /// Raw reference to resolved URL
    pub urls: HashMap<String, String>,
    /// When the pass completed
    pub generated_at: DateTime<Utc>,
}

impl AssetReport {
    fn new(urls: HashMap<String, String>) -> Self {
        Self {
            count: urls.len(),
            urls,
            generated_at: Utc::now(),
        }
    }

    /// Looks up the resolved URL for a raw reference
    pub fn url_for(&self, reference: &str) -> Option<&str> {
        self.urls.get(reference).map(String::as_str)
    }
}

// =============================================================================
// Reference Classification
// =============================================================================

/// How an image reference is routed, derived from its prefix
#[derive(Debug, Clone, PartialEq, Eq)]
enum AssetClass {
    /// `logo-<variant>` references the curated logo catalog
    Logo(String),
    /// `social-<platform>` references the curated social-icon catalog
    Social(String),
    /// Everything else goes through the strategy chain; `use_ai` is set
    /// when the reference carries a custom/generate marker
    Generic { use_ai: bool },
}

fn classify(reference: &str) -> AssetClass {
    if let Some(variant) = reference.strip_prefix("logo-") {
        return AssetClass::Logo(variant.to_string());
    }
    if let Some(platform) = reference.strip_prefix("social-") {
        return AssetClass::Social(platform.to_string());
    }

    let lower = reference.to_lowercase();
    AssetClass::Generic {
        use_ai: lower.contains("custom") || lower.contains("generate"),
    }
}

// =============================================================================
// Asset Resolver
// =============================================================================

/// Resolves symbolic image references in a document to concrete URLs
pub struct AssetResolver {
    strategy: AssetStrategy,
    library: AssetLibrary,
    stock: Arc<dyn AssetProvider>,
    generative: Arc<dyn AssetProvider>,
    placeholder: Arc<dyn AssetProvider>,
}

impl AssetResolver {
    /// Creates a resolver from configuration.
    ///
    /// The only configuration treated as fatal is the `dalle` strategy
    /// without an OpenAI API key; every other gap degrades at resolution
    /// time instead.
    pub fn new(config: ResolverConfig) -> CoreResult<Self> {
        if config.strategy == AssetStrategy::Dalle && config.openai_api_key.is_none() {
            return Err(CoreError::MissingCredential(
                "OPENAI_API_KEY is required for the dalle strategy".to_string(),
            ));
        }

        let library = match &config.library_base_url {
            Some(url) => AssetLibrary::new(url.clone()),
            None => AssetLibrary::default(),
        };

        Ok(Self {
            strategy: config.strategy,
            library,
            stock: Arc::new(UnsplashProvider::new(config.unsplash_access_key)?),
            generative: Arc::new(DalleProvider::new(config.openai_api_key)?),
            placeholder: Arc::new(PlaceholderProvider::new()),
        })
    }

    /// Replaces the curated library
    pub fn with_library(mut self, library: AssetLibrary) -> Self {
        self.library = library;
        self
    }

    /// Replaces the stock-photo provider
    pub fn with_stock_provider(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.stock = provider;
        self
    }

    /// Replaces the generative provider
    pub fn with_generative_provider(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.generative = provider;
        self
    }

    /// Replaces the terminal placeholder provider
    pub fn with_placeholder_provider(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.placeholder = provider;
        self
    }

    /// The configured strategy
    pub fn strategy(&self) -> AssetStrategy {
        self.strategy
    }

    /// Walks the document, resolves every image reference, rewrites each
    /// module's `src` in place, and returns the audit report.
    pub async fn resolve_document(&self, document: &mut Document) -> CoreResult<AssetReport> {
        let mut memo: HashMap<String, String> = HashMap::new();

        for row in &mut document.template.rows {
            for column in &mut row.columns {
                for module in &mut column.modules {
                    let Module::Image(image) = module else {
                        continue;
                    };
                    let Some(reference) = image.src.clone().filter(|s| !s.is_empty()) else {
                        continue;
                    };

                    let url = match memo.get(&reference) {
                        Some(url) => url.clone(),
                        None => {
                            let description = image
                                .alt
                                .as_deref()
                                .filter(|alt| !alt.is_empty())
                                .unwrap_or(&reference);
                            let url = self.resolve_reference(&reference, description).await?;
                            tracing::debug!(reference = %reference, url = %url, "Resolved asset");
                            memo.insert(reference.clone(), url.clone());
                            url
                        }
                    };

                    image.src = Some(url);
                }
            }
        }

        Ok(AssetReport::new(memo))
    }

    /// Resolves one classified reference to a URL. Always terminates with
    /// some URL; only provider construction can fail before this point.
    async fn resolve_reference(&self, reference: &str, description: &str) -> CoreResult<String> {
        match classify(reference) {
            AssetClass::Logo(variant) => match self.library.logo(&variant) {
                Some(url) => Ok(url),
                None => {
                    tracing::warn!(variant = %variant, "No logo in library, using placeholder");
                    self.placeholder_url(description).await
                }
            },
            AssetClass::Social(platform) => match self.library.social_icon(&platform) {
                Some(url) => Ok(url),
                None => {
                    tracing::warn!(platform = %platform, "No social icon in library, using placeholder");
                    self.placeholder_url(description).await
                }
            },
            AssetClass::Generic { use_ai } => self.resolve_generic(description, use_ai).await,
        }
    }

    /// Strategy chain for generic references. Lookup misses and provider
    /// failures fall through; the placeholder provider is the terminal
    /// step and never misses.
    async fn resolve_generic(&self, description: &str, use_ai: bool) -> CoreResult<String> {
        // Explicit generation requests route to the generative provider,
        // honored only under strategies that enable it.
        if use_ai && matches!(self.strategy, AssetStrategy::Dalle | AssetStrategy::Mixed) {
            match self
                .generative
                .resolve(description, DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .await
            {
                Ok(Some(url)) => return Ok(url),
                Ok(None) => {
                    tracing::warn!(provider = self.generative.name(), "Generation yielded no image");
                }
                Err(e) => {
                    tracing::warn!(provider = self.generative.name(), error = %e, "Generation failed");
                }
            }
            return self.placeholder_url(description).await;
        }

        match self.strategy {
            AssetStrategy::Unsplash => Ok(UnsplashProvider::source_url(
                description,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
            )),
            AssetStrategy::Placeholder => self.placeholder_url(description).await,
            // dalle without an explicit generation request behaves like
            // mixed: authenticated search first, placeholder on a miss
            AssetStrategy::Dalle | AssetStrategy::Mixed => {
                match self
                    .stock
                    .resolve(description, DEFAULT_WIDTH, DEFAULT_HEIGHT)
                    .await
                {
                    Ok(Some(url)) => Ok(url),
                    Ok(None) => self.placeholder_url(description).await,
                    Err(e) => {
                        tracing::warn!(provider = self.stock.name(), error = %e, "Stock lookup failed");
                        self.placeholder_url(description).await
                    }
                }
            }
        }
    }

    async fn placeholder_url(&self, description: &str) -> CoreResult<String> {
        match self
            .placeholder
            .resolve(description, DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .await?
        {
            Some(url) => Ok(url),
            // the built-in placeholder never misses; an injected one might
            None => Ok(PlaceholderProvider::image_url(
                description,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
            )),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
