//! Crawl Engine Module
//!
//! This module contains the mirror engine: link discovery on the home page,
//! site-wide stylesheet localization, and the orchestration of one run.

// Sub-modules
pub mod crawl_types;
pub mod link_processor;
pub mod orchestrator;
pub mod progress;
pub mod stylesheets;

// Re-exports for public API
pub use orchestrator::{mirror_site, prepare_output_dirs};
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};

pub use crawl_types::{MirrorError, MirrorResult, MirrorSummary, PageTask};
pub use link_processor::{discover_page_tasks, extract_anchor_links, extract_stylesheet_links};
pub use stylesheets::{StylesheetOutcome, localize_stylesheets};
