// Mirror a website into a static app-router project.
//
// Usage: kodegen-sitemirror <SITE_NAME> <SITE_URL>
// The output project is created at ./<SITE_NAME>.

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_sitemirror::scaffold::scaffold_project;
use kodegen_tools_sitemirror::{CollisionPolicy, SiteContext, TemplateKind, mirror};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "kodegen-sitemirror", version, about = "Mirror a website into a static app-router project")]
struct Cli {
    /// Name of the output directory, created in the current directory
    site_name: String,

    /// Origin to mirror, e.g. https://www.site.com
    site_url: String,

    /// Page template to render
    #[arg(long, value_enum, default_value_t = TemplateKind::Next)]
    template: TemplateKind,

    /// Run `npx create-next-app@latest <SITE_NAME>` before mirroring
    #[arg(long)]
    scaffold: bool,

    /// Keep existing files in app/, styles/ and public/
    #[arg(long)]
    no_clean: bool,

    /// Give distinct URLs with the same filename their own local file
    #[arg(long)]
    disambiguate: bool,

    /// Request timeout in seconds for pages, stylesheets and assets
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// Single logical thread: requests interleave, pages never run in parallel
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let working_dir = std::env::current_dir().context("Failed to read current directory")?;

    if cli.scaffold
        && let Err(e) = scaffold_project(&cli.site_name, &working_dir).await
    {
        log::warn!("Scaffolding failed, continuing with the mirror: {e:#}");
    }

    let mut builder = SiteContext::builder()
        .output_root(working_dir.join(&cli.site_name))
        .base_url(&cli.site_url)
        .clean_output(!cli.no_clean && !cli.scaffold);
    if cli.disambiguate {
        builder = builder.collision_policy(CollisionPolicy::Disambiguate);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let ctx = builder.build()?;

    let summary = mirror(&ctx, cli.template).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
