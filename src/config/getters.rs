//! Getter methods for `SiteContext`

use std::path::Path;
use std::time::Duration;

use super::types::{CollisionPolicy, SiteContext};

impl SiteContext {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub fn page_timeout(&self) -> Duration {
        self.page_timeout
    }

    #[must_use]
    pub fn stylesheet_timeout(&self) -> Duration {
        self.stylesheet_timeout
    }

    #[must_use]
    pub fn asset_timeout(&self) -> Duration {
        self.asset_timeout
    }

    #[must_use]
    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    #[must_use]
    pub fn max_stylesheet_size(&self) -> usize {
        self.max_stylesheet_size
    }

    #[must_use]
    pub fn max_asset_size(&self) -> usize {
        self.max_asset_size
    }

    #[must_use]
    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy
    }

    #[must_use]
    pub fn clean_output(&self) -> bool {
        self.clean_output
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
