//! Optional project scaffolding before mirroring
//!
//! Runs the Next.js project generator in the working directory so the
//! mirrored `app/`, `styles/` and `public/` land inside a buildable project.
//! The mirror does not depend on it: output directories are created anyway.

use anyhow::{Context, Result, bail};
use std::path::Path;
use tokio::process::Command;

/// Generator command and its leading arguments; the site name is appended
pub const SCAFFOLD_COMMAND: [&str; 2] = ["npx", "create-next-app@latest"];

/// Run the project generator for `site_name` inside `working_dir`
pub async fn scaffold_project(site_name: &str, working_dir: &Path) -> Result<()> {
    let [program, generator] = SCAFFOLD_COMMAND;
    log::info!(target: "sitemirror::crawl", "Creating Next.js project: {site_name}");

    let status = Command::new(program)
        .arg(generator)
        .arg(site_name)
        .current_dir(working_dir)
        .status()
        .await
        .with_context(|| format!("Failed to launch {program} {generator}"))?;

    if !status.success() {
        bail!("{program} {generator} exited with {status}");
    }
    Ok(())
}
