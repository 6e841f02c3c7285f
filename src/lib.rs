pub mod asset_localizer;
pub mod config;
pub mod crawl_engine;
pub mod page_renderer;
pub mod scaffold;
pub mod utils;

pub use asset_localizer::{
    AssetFetcher, FetchError, HttpFetch, HttpFetcher, RenderedPage, ResourceType, rewrite_css,
    rewrite_page,
};
pub use config::{CollisionPolicy, SiteContext};
pub use crawl_engine::{
    LogProgress, MirrorError, MirrorResult, MirrorSummary, NoOpProgress, PageTask,
    ProgressReporter, mirror_site,
};
pub use page_renderer::{HtmlPageRenderer, NextPageRenderer, PageRenderer, TemplateKind};
pub use utils::{resolve_reference, route_from_link, sanitize_filename};

/// Mirror a site over HTTP with the given template, logging progress
pub async fn mirror(ctx: &SiteContext, template: TemplateKind) -> MirrorResult<MirrorSummary> {
    let http = HttpFetcher::new(ctx)?;
    let renderer = template.renderer();
    mirror_site(ctx, &http, renderer.as_ref(), &LogProgress).await
}
