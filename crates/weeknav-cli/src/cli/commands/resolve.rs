//! `weeknav resolve <button> <url>` – resolve a button press to a URL.

use anyhow::Result;
use weeknav_core::config::NavConfig;
use weeknav_core::identity::parse_identity;
use weeknav_core::navigator::{Button, Navigator};
use weeknav_core::site::{self, SiteLayout};

use super::probe_from;

pub async fn run_resolve(cfg: &NavConfig, button: Button, url: &str) -> Result<()> {
    // Anchor the layout at the current page so candidates resolve to its
    // siblings, the way a browser resolves relative links.
    let layout = SiteLayout::new(url)?;
    let file = site::page_file(url)?;
    let identity = parse_identity(&file);
    tracing::debug!("resolving {button:?} on {url} ({identity:?})");

    let nav = Navigator::bind(identity, &layout, cfg.year, probe_from(cfg)).await?;
    match nav.resolve(button).await {
        Some(dest) => println!("{dest}"),
        None => println!("no destination (no weekly reports found)"),
    }
    Ok(())
}
