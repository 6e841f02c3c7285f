//! Asset localization
//!
//! This module downloads the resources a page depends on (stylesheets,
//! images, fonts), stores them under the output root, and rewrites the
//! referring HTML and CSS to point at the local copies.

// Sub-modules
pub mod css_rewriter;
pub mod downloaders;
pub mod fetcher;
pub mod page_rewriter;
pub mod registry;
pub mod types;

// Re-exports for public API
pub use css_rewriter::{apply_css_replacements, extract_css_references, rewrite_css};
pub use downloaders::{HttpFetch, HttpFetcher};
pub use fetcher::AssetFetcher;
pub use page_rewriter::rewrite_page;
pub use registry::FilenameRegistry;
pub use types::{AssetError, AssetReference, FetchError, RenderedPage, ResourceType};
