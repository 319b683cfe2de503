//! Asset Resolution
//!
//! Maps symbolic image references in a document (curated library keys,
//! stock-photo descriptions, generation prompts) to concrete URLs through
//! a configurable provider chain, and reports what was resolved.

pub mod dalle;
pub mod library;
pub mod placeholder;
pub mod providers;
pub mod resolver;
pub mod unsplash;

pub use dalle::{DalleImageSize, DalleProvider};
pub use library::AssetLibrary;
pub use placeholder::PlaceholderProvider;
pub use providers::{AssetProvider, AssetStrategy, MockAssetProvider};
pub use resolver::{AssetReport, AssetResolver, ResolverConfig};
pub use unsplash::UnsplashProvider;
