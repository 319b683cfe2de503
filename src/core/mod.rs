//! Mailsmith Core Engine
//!
//! Core engine module. Handles the validated document model, asset
//! resolution, and the generation pipeline.

pub mod ai;
pub mod assets;
pub mod document;
pub mod generator;

mod error;
pub use error::*;
