//! Shared configuration constants for sitemirror
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Directory (under the output root) receiving one rendered page per route
pub const APP_DIR: &str = "app";

/// Directory (under the output root) receiving rewritten stylesheets
pub const STYLES_DIR: &str = "styles";

/// Directory (under the output root) receiving images, fonts and other binaries
pub const PUBLIC_DIR: &str = "public";

/// Base name of every rendered page file; the renderer supplies the extension
pub const PAGE_FILE_STEM: &str = "page";

/// Default timeout for HTML page downloads: 30 seconds
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 30;

/// Default timeout for stylesheet downloads: 30 seconds
pub const DEFAULT_STYLESHEET_TIMEOUT_SECS: u64 = 30;

/// Default timeout for image/font downloads: 60 seconds
///
/// Binary assets are larger and often served from slower CDNs.
pub const DEFAULT_ASSET_TIMEOUT_SECS: u64 = 60;

/// Maximum size for HTML page downloads: 10MB
pub const DEFAULT_MAX_PAGE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum size for stylesheet downloads: 2MB
///
/// Typical: 50-200KB, Large frameworks: 500KB-1MB
pub const DEFAULT_MAX_STYLESHEET_SIZE: usize = 2 * 1024 * 1024;

/// Maximum size for image/font downloads: 20MB
pub const DEFAULT_MAX_ASSET_SIZE: usize = 20 * 1024 * 1024;

/// Chrome user agent string sent with every request
///
/// Some origins refuse or degrade responses for non-browser agents.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
