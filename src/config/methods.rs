//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::time::Duration;

use super::builder::SiteContextBuilder;
use super::types::CollisionPolicy;

impl<State> SiteContextBuilder<State> {
    /// Set the same timeout for pages, stylesheets and assets
    ///
    /// Without this, the HTTP client would wait indefinitely on a stalled
    /// origin; every fetch kind gets an explicit deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self.stylesheet_timeout = timeout;
        self.asset_timeout = timeout;
        self
    }

    #[must_use]
    pub fn page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    #[must_use]
    pub fn stylesheet_timeout(mut self, timeout: Duration) -> Self {
        self.stylesheet_timeout = timeout;
        self
    }

    #[must_use]
    pub fn asset_timeout(mut self, timeout: Duration) -> Self {
        self.asset_timeout = timeout;
        self
    }

    #[must_use]
    pub fn max_page_size(mut self, bytes: usize) -> Self {
        self.max_page_size = bytes;
        self
    }

    #[must_use]
    pub fn max_stylesheet_size(mut self, bytes: usize) -> Self {
        self.max_stylesheet_size = bytes;
        self
    }

    /// Maximum size for a single image/font download
    ///
    /// Larger assets are treated as failed downloads: the referring document
    /// keeps the remote URL.
    #[must_use]
    pub fn max_asset_size(mut self, bytes: usize) -> Self {
        self.max_asset_size = bytes;
        self
    }

    #[must_use]
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Clear `app/`, `styles/` and `public/` before mirroring (default: true)
    ///
    /// Disable when an external scaffolding step has already placed files in
    /// `public/` that must survive.
    #[must_use]
    pub fn clean_output(mut self, clean: bool) -> Self {
        self.clean_output = clean;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
