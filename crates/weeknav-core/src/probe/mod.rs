//! HTTP HEAD existence probing.
//!
//! Uses the curl crate (libcurl) to issue a header-only request and report
//! whether the target page exists. The outcome is deliberately flat: a 2xx
//! status means the page exists, everything else (curl error, timeout,
//! non-2xx status) means it does not. No retry, no caching.

use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;

/// Seam for existence checks so navigation logic can be tested without a
/// server. Implementations must treat every failure as "does not exist".
pub trait ExistenceProbe {
    fn exists(&self, url: &str) -> impl Future<Output = bool> + Send;
}

/// HEAD-probing implementation backed by curl.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl HttpProbe {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), Duration::from_secs(20))
    }
}

impl ExistenceProbe for HttpProbe {
    fn exists(&self, url: &str) -> impl Future<Output = bool> + Send {
        let url = url.to_string();
        let connect = self.connect_timeout;
        let total = self.request_timeout;
        async move {
            // The curl transfer blocks; keep it off the async runtime.
            match tokio::task::spawn_blocking(move || head_ok(&url, connect, total)).await {
                Ok(ok) => ok,
                Err(err) => {
                    tracing::debug!("probe task failed: {err}");
                    false
                }
            }
        }
    }
}

/// Performs a HEAD request and reports whether the response status is 2xx.
/// Runs in the current thread; call from `spawn_blocking` in async code.
fn head_ok(url: &str, connect_timeout: Duration, request_timeout: Duration) -> bool {
    match head_status(url, connect_timeout, request_timeout) {
        Ok(code) => (200..300).contains(&code),
        Err(err) => {
            tracing::debug!("HEAD {url} failed: {err:#}");
            false
        }
    }
}

fn head_status(url: &str, connect_timeout: Duration, request_timeout: Duration) -> Result<u32> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(request_timeout)?;
    easy.perform().context("HEAD request failed")?;
    easy.response_code().context("no response code")
}
