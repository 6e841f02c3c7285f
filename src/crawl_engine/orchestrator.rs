//! Main mirror orchestration logic
//!
//! Drives one run over a fixed page set:
//! 1. prepare `app/`, `styles/`, `public/`
//! 2. fetch the home page (fatal on failure)
//! 3. localize the home page's stylesheets (shared by all pages)
//! 4. discover root-relative links on the home page
//! 5. rewrite and write the home page
//! 6. fetch, rewrite and write each linked page, one at a time
//!
//! Only step 1 and step 2 can abort the run. Every later failure is logged
//! and skipped; output already written is kept.

use log::{debug, info, warn};

use super::crawl_types::{MirrorError, MirrorResult, MirrorSummary, PageTask};
use super::link_processor::{discover_page_tasks, extract_anchor_links, extract_stylesheet_links};
use super::progress::ProgressReporter;
use super::stylesheets::localize_stylesheets;
use crate::asset_localizer::fetcher::write_file;
use crate::asset_localizer::{AssetError, AssetFetcher, HttpFetch, ResourceType, rewrite_page};
use crate::config::SiteContext;
use crate::page_renderer::PageRenderer;

/// Create (and optionally clear) the output directories
pub async fn prepare_output_dirs(ctx: &SiteContext) -> MirrorResult<()> {
    for dir in [ctx.app_dir(), ctx.styles_dir(), ctx.public_dir()] {
        if ctx.clean_output() {
            match tokio::fs::remove_dir_all(&dir).await {
                Ok(()) => debug!(target: "sitemirror::crawl", "Cleared {}", dir.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => return Err(MirrorError::Io { path: dir, source }),
            }
        }

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| MirrorError::Io {
                path: dir.clone(),
                source,
            })?;
    }
    Ok(())
}

/// Rewrite one page's HTML, render it and write it under `app/<route>/`
async fn emit_page<F: HttpFetch, R: PageRenderer + ?Sized, P: ProgressReporter>(
    html: &str,
    route: &str,
    stylesheets: &[String],
    fetcher: &AssetFetcher<'_, F>,
    renderer: &R,
    progress: &P,
) -> Result<(), AssetError> {
    let ctx = fetcher.context();
    let page = rewrite_page(html, route, stylesheets, fetcher).await;
    let rendered = renderer.render(&page);

    let path = ctx.page_path(route, renderer.extension());
    write_file(&path, rendered.as_bytes()).await?;

    progress.report_page_written(route, &path);
    Ok(())
}

/// Mirror the site described by `ctx` into its output root
///
/// # Errors
///
/// Returns `MirrorError::Io` when the output directories cannot be prepared
/// and `MirrorError::HomePage` when the home page cannot be fetched. Every
/// other failure is logged, counted in the summary, and skipped.
pub async fn mirror_site<F, R, P>(
    ctx: &SiteContext,
    http: &F,
    renderer: &R,
    progress: &P,
) -> MirrorResult<MirrorSummary>
where
    F: HttpFetch,
    R: PageRenderer + ?Sized,
    P: ProgressReporter,
{
    progress.report_started(ctx.base_url());

    prepare_output_dirs(ctx).await?;

    let fetcher = AssetFetcher::new(ctx, http);
    let mut summary = MirrorSummary {
        output_root: ctx.output_root().to_path_buf(),
        ..MirrorSummary::default()
    };

    let home_html = fetcher
        .fetch_text(ctx.base_url(), ResourceType::Page)
        .await
        .map_err(|source| MirrorError::HomePage {
            url: ctx.base_url().to_string(),
            source,
        })?;

    let stylesheet_hrefs = extract_stylesheet_links(&home_html);
    let stylesheets = localize_stylesheets(&stylesheet_hrefs, &fetcher, progress).await;
    summary.stylesheets_saved = stylesheets.saved.len();
    summary.stylesheets_failed = stylesheets.failed;

    let tasks = discover_page_tasks(&extract_anchor_links(&home_html), ctx.base_url());

    let home = PageTask {
        route: String::new(),
        absolute_url: ctx.base_url().to_string(),
    };
    match emit_page(&home_html, &home.route, &stylesheets.saved, &fetcher, renderer, progress).await
    {
        Ok(()) => summary.pages_written += 1,
        Err(e) => {
            warn!(target: "sitemirror::pages", "Failed to write home page: {e}");
            progress.report_page_skipped(&home.absolute_url, &e.to_string());
            summary.pages_skipped += 1;
        }
    }

    for task in &tasks {
        let html = match fetcher.fetch_text(&task.absolute_url, ResourceType::Page).await {
            Ok(html) => html,
            Err(e) => {
                warn!(target: "sitemirror::pages", "Failed to fetch {}: {e}", task.absolute_url);
                progress.report_page_skipped(&task.absolute_url, &e.to_string());
                summary.pages_skipped += 1;
                continue;
            }
        };

        match emit_page(&html, &task.route, &stylesheets.saved, &fetcher, renderer, progress).await {
            Ok(()) => summary.pages_written += 1,
            Err(e) => {
                warn!(target: "sitemirror::pages", "Failed to write {}: {e}", task.route);
                progress.report_page_skipped(&task.absolute_url, &e.to_string());
                summary.pages_skipped += 1;
            }
        }
    }

    summary.assets_localized = fetcher.localized_count();
    summary.assets_failed = fetcher.failed_count();

    info!(
        target: "sitemirror::crawl",
        "Mirrored {} of {} pages from {}",
        summary.pages_written,
        tasks.len() + 1,
        ctx.base_url()
    );
    progress.report_completed(&summary);

    Ok(summary)
}
