//! Mailsmith Core Library
//!
//! A nested, polymorphic document format for email/page layouts
//! ("templates") and an asset-resolution pass that turns symbolic image
//! references (`logo-primary`, `social-facebook`, `hero-tech-startup`)
//! into concrete, fetchable URLs.
//!
//! The crate has three layers:
//!
//! - [`core::document`]: the strict, alias-tolerant, constraint-checked
//!   document model (rows of columns of modules) and its validator.
//! - [`core::assets`]: pluggable asset providers (curated library,
//!   Unsplash, DALL-E, placeholder) and the [`core::assets::AssetResolver`]
//!   that rewrites a validated document in place.
//! - [`core::ai`] and [`core::generator`]: the external completion
//!   boundary and the end-to-end generation pipeline.
//!
//! Networked providers are gated behind the `http-providers` cargo
//! feature; without it every lookup degrades to an offline fallback.

pub mod core;

pub use crate::core::{CoreError, CoreResult};
pub use crate::core::assets::{AssetReport, AssetResolver, AssetStrategy, ResolverConfig};
pub use crate::core::document::{Document, Module, Template};
pub use crate::core::generator::{GeneratedTemplate, GeneratorConfig, TemplateGenerator};
