//! Configuration module for site mirroring
//!
//! This module provides the `SiteContext` struct and its type-safe builder
//! for configuring a mirror run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SiteContextBuilder, WithBaseUrl, WithOutputRoot};
pub use types::{CollisionPolicy, SiteContext};
