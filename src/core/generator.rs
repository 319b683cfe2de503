//! Template Generator
//!
//! Orchestrates a completion provider and the asset resolver: prompts the
//! model for a template document in JSON mode, validates the untrusted
//! output against the document schema, resolves every image reference,
//! and packages the result with its asset audit report.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ai::{CompletionProvider, CompletionRequest};
use crate::core::assets::{AssetReport, AssetResolver};
use crate::core::document::Document;
use crate::core::{CoreError, CoreResult};

/// System prompt steering the model toward schema-conformant templates
/// with symbolic asset references the resolver understands
const SYSTEM_PROMPT: &str = r#"You are an expert email template designer.

Create professional, responsive email templates based on the user's requirements.

Guidelines:
- Use semantically correct modules (title for headings, paragraph for text, etc.)
- Use sensible padding values (typically 10-20px)
- Use professional colors (hex codes)
- Buttons should have clear calls to action
- Images always need alt text
- Keep mobile responsiveness in mind

Standard colors:
- Primary: #2563eb (blue)
- Success: #16a34a (green)
- Text: #1f2937 (dark gray)
- Background: #ffffff (white)

For images, use descriptive references in src that are replaced with real
assets later:
- Use src="logo-primary" for logos
- Use src="social-{platform}" for social icons (e.g. "social-facebook")
- Use descriptive src text for content images: "hero-image-modern-office"
- Set meaningful alt texts

Example:
{
  "type": "image",
  "src": "hero-tech-startup",
  "alt": "Modern tech startup office with team collaboration"
}

Respond with a single JSON object of the form {"template": {...}}."#;

// =============================================================================
// Configuration
// =============================================================================

/// Generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Model override passed to the completion provider
    pub model: Option<String>,
    /// Maximum completion tokens
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl GeneratorConfig {
    /// Creates a config with provider defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the maximum completion tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

// =============================================================================
// Generated Artifact
// =============================================================================

/// A validated template with its assets resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTemplate {
    /// The resolved document, serialized with wire-form field names
    #[serde(flatten)]
    pub document: Document,
    /// Audit of every resolved asset reference
    pub assets: AssetReport,
}

impl GeneratedTemplate {
    /// Serializes the artifact to pretty-printed JSON, omitting absent
    /// fields
    pub fn to_json_string(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Template Generator
// =============================================================================

/// Generates asset-resolved template documents from natural-language
/// prompts
pub struct TemplateGenerator {
    provider: Arc<dyn CompletionProvider>,
    resolver: AssetResolver,
    config: GeneratorConfig,
}

impl TemplateGenerator {
    /// Creates a generator from a completion provider and asset resolver
    pub fn new(provider: Arc<dyn CompletionProvider>, resolver: AssetResolver) -> Self {
        Self {
            provider,
            resolver,
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the generator configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a template for the prompt: completes, validates the
    /// untrusted model output, resolves assets, and returns the artifact.
    pub async fn generate(&self, prompt: &str) -> CoreResult<GeneratedTemplate> {
        let mut request = CompletionRequest::new(prompt)
            .with_system(SYSTEM_PROMPT)
            .with_json_mode();
        if let Some(model) = &self.config.model {
            request = request.with_model(model);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }

        tracing::debug!(provider = self.provider.name(), "Requesting template completion");
        let response = self.provider.complete(request).await?;

        if response.text.trim().is_empty() {
            return Err(CoreError::EmptyCompletion(
                "Model returned no template".to_string(),
            ));
        }

        // Model output is untrusted until it passes schema validation
        let mut document = Document::from_json_str(&response.text)?;
        tracing::debug!(
            model = %response.model,
            rows = document.template.rows.len(),
            modules = document.template.module_count(),
            "Validated generated template"
        );

        let assets = self.resolver.resolve_document(&mut document).await?;
        tracing::debug!(resolved = assets.count, "Resolved template assets");

        Ok(GeneratedTemplate { document, assets })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ai::MockCompletionProvider;
    use crate::core::assets::{AssetStrategy, ResolverConfig};

    fn placeholder_resolver() -> AssetResolver {
        AssetResolver::new(ResolverConfig::new().with_strategy(AssetStrategy::Placeholder))
            .unwrap()
    }

    const VALID_TEMPLATE: &str = r#"{
        "template": {
            "type": "email",
            "rows": [{
                "name": "Hero",
                "columns": [{
                    "weight": 12,
                    "modules": [
                        {"type": "title", "text": "Welcome!"},
                        {"type": "image", "src": "logo-primary", "alt": "Company logo"},
                        {"type": "image", "src": "hero-office", "alt": "Modern office"}
                    ]
                }]
            }]
        }
    }"#;

    #[tokio::test]
    async fn test_generate_validates_and_resolves() {
        let provider = Arc::new(MockCompletionProvider::new("mock").with_response(VALID_TEMPLATE));
        let generator = TemplateGenerator::new(provider, placeholder_resolver());

        let generated = generator.generate("Welcome email").await.unwrap();

        assert_eq!(generated.assets.count, 2);
        assert_eq!(
            generated.assets.url_for("logo-primary"),
            Some("https://your-cdn.com/assets/logo-primary.png")
        );
        assert!(generated
            .assets
            .url_for("hero-office")
            .unwrap()
            .starts_with("https://placehold.co/"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_completion() {
        let provider = Arc::new(MockCompletionProvider::new("mock").with_response("   \n"));
        let generator = TemplateGenerator::new(provider, placeholder_resolver());

        let result = generator.generate("Anything").await;
        assert!(matches!(result, Err(CoreError::EmptyCompletion(_))));
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_module() {
        let provider = Arc::new(MockCompletionProvider::new("mock").with_response(
            r#"{"template": {"type": "email", "rows": [{"name": "Body", "columns": [{
                "weight": 12, "modules": [{"type": "unknown-widget"}]
            }]}]}}"#,
        ));
        let generator = TemplateGenerator::new(provider, placeholder_resolver());

        let result = generator.generate("Anything").await;
        assert!(matches!(result, Err(CoreError::UnknownVariant { .. })));
    }

    #[tokio::test]
    async fn test_generate_propagates_provider_failure() {
        let provider = Arc::new(MockCompletionProvider::new("mock").with_available(false));
        let generator = TemplateGenerator::new(provider, placeholder_resolver());

        let result = generator.generate("Anything").await;
        assert!(matches!(result, Err(CoreError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_artifact_serializes_with_wire_names() {
        let provider = Arc::new(MockCompletionProvider::new("mock").with_response(VALID_TEMPLATE));
        let generator = TemplateGenerator::new(provider, placeholder_resolver());

        let generated = generator.generate("Welcome email").await.unwrap();
        let json = generated.to_json_string().unwrap();

        assert!(json.contains("\"template\""));
        assert!(json.contains("\"assets\""));
        // resolved src replaces the symbolic reference
        assert!(json.contains("https://your-cdn.com/assets/logo-primary.png"));
        assert!(!json.contains("\"src\": \"logo-primary\""));
    }
}
