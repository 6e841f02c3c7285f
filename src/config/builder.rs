//! Type-safe builder for `SiteContext` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the output root and the base URL are set before building.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{CollisionPolicy, SiteContext};
use crate::crawl_engine::MirrorError;
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_ASSET_TIMEOUT_SECS, DEFAULT_MAX_ASSET_SIZE, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_MAX_STYLESHEET_SIZE, DEFAULT_PAGE_TIMEOUT_SECS, DEFAULT_STYLESHEET_TIMEOUT_SECS,
};

/// Normalize a site URL: add `https://` if no scheme is present and drop trailing slashes
fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    let with_scheme = if crate::utils::is_absolute_http(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

// Type states for the builder
pub struct WithOutputRoot;
pub struct WithBaseUrl;

pub struct SiteContextBuilder<State = ()> {
    pub(crate) output_root: Option<PathBuf>,
    pub(crate) base_url: Option<String>,
    pub(crate) page_timeout: Duration,
    pub(crate) stylesheet_timeout: Duration,
    pub(crate) asset_timeout: Duration,
    pub(crate) max_page_size: usize,
    pub(crate) max_stylesheet_size: usize,
    pub(crate) max_asset_size: usize,
    pub(crate) collision_policy: CollisionPolicy,
    pub(crate) clean_output: bool,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SiteContextBuilder<()> {
    fn default() -> Self {
        Self {
            output_root: None,
            base_url: None,
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
            stylesheet_timeout: Duration::from_secs(DEFAULT_STYLESHEET_TIMEOUT_SECS),
            asset_timeout: Duration::from_secs(DEFAULT_ASSET_TIMEOUT_SECS),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            max_stylesheet_size: DEFAULT_MAX_STYLESHEET_SIZE,
            max_asset_size: DEFAULT_MAX_ASSET_SIZE,
            collision_policy: CollisionPolicy::default(),
            clean_output: true,
            user_agent: CHROME_USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl SiteContext {
    /// Create a builder for configuring a `SiteContext` with a fluent interface
    #[must_use]
    pub fn builder() -> SiteContextBuilder<()> {
        SiteContextBuilder::default()
    }
}

impl<State> SiteContextBuilder<State> {
    fn into_state<Next>(self) -> SiteContextBuilder<Next> {
        SiteContextBuilder {
            output_root: self.output_root,
            base_url: self.base_url,
            page_timeout: self.page_timeout,
            stylesheet_timeout: self.stylesheet_timeout,
            asset_timeout: self.asset_timeout,
            max_page_size: self.max_page_size,
            max_stylesheet_size: self.max_stylesheet_size,
            max_asset_size: self.max_asset_size,
            collision_policy: self.collision_policy,
            clean_output: self.clean_output,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl SiteContextBuilder<()> {
    pub fn output_root(mut self, dir: impl Into<PathBuf>) -> SiteContextBuilder<WithOutputRoot> {
        self.output_root = Some(dir.into());
        self.into_state()
    }
}

impl SiteContextBuilder<WithOutputRoot> {
    pub fn base_url(mut self, url: impl Into<String>) -> SiteContextBuilder<WithBaseUrl> {
        self.base_url = Some(normalize_base_url(&url.into()));
        self.into_state()
    }
}

// Build method only available when all required fields are set
impl SiteContextBuilder<WithBaseUrl> {
    pub fn build(self) -> Result<SiteContext, MirrorError> {
        let base_url = self
            .base_url
            .ok_or_else(|| MirrorError::Config("base URL is required".to_string()))?;
        let output_root = self
            .output_root
            .ok_or_else(|| MirrorError::Config("output root is required".to_string()))?;

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| MirrorError::Config(format!("Invalid site URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(MirrorError::Config(format!(
                "Site URL must be an http(s) URL with a host: {base_url}"
            )));
        }

        if output_root.as_os_str().is_empty() {
            return Err(MirrorError::Config("output root must not be empty".to_string()));
        }

        Ok(SiteContext {
            base_url,
            output_root,
            page_timeout: self.page_timeout,
            stylesheet_timeout: self.stylesheet_timeout,
            asset_timeout: self.asset_timeout,
            max_page_size: self.max_page_size,
            max_stylesheet_size: self.max_stylesheet_size,
            max_asset_size: self.max_asset_size,
            collision_policy: self.collision_policy,
            clean_output: self.clean_output,
            user_agent: self.user_agent,
        })
    }
}
