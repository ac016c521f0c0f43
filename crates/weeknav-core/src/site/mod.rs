//! Site layout: filename template and URL construction.
//!
//! Weekly report pages follow a fixed naming contract with the page
//! generator: `kw_<week>_<year>.html` plus a single `index.html` landing
//! page. All navigation targets are built from that template and resolved
//! relative to the current page, the way a browser resolves sibling links.

use anyhow::{Context, Result};
use url::Url;

/// Canonical landing page filename.
pub const INDEX_FILE: &str = "index.html";

/// Builds the relative filename for a weekly report page.
pub fn week_page(week: u32, year: u32) -> String {
    format!("kw_{week}_{year}.html")
}

/// Extracts the final path segment of a page URL.
///
/// Returns an empty string for a root or trailing-slash path, which the
/// identity parser treats as the landing page.
pub fn page_file(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("invalid page URL: {url}"))?;
    let file = parsed.path().rsplit('/').next().unwrap_or_default();
    Ok(file.to_string())
}

/// Resolves relative filenames against a fixed base page or site root.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    base: Url,
}

impl SiteLayout {
    /// Creates a layout anchored at `base_url` (a site root or the current
    /// page's URL; relative filenames resolve to its siblings).
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid base URL: {base_url}"))?;
        Ok(Self { base })
    }

    /// Resolves a relative filename into an absolute URL string.
    pub fn resolve(&self, file: &str) -> Result<String> {
        let url = self
            .base
            .join(file)
            .with_context(|| format!("cannot resolve {file} against {}", self.base))?;
        Ok(url.into())
    }

    /// Absolute URL of the landing page.
    pub fn index_url(&self) -> Result<String> {
        self.resolve(INDEX_FILE)
    }
}
