//! Subcommand implementations.

mod identify;
mod range;
mod resolve;

pub use identify::run_identify;
pub use range::run_range;
pub use resolve::run_resolve;

use weeknav_core::config::NavConfig;
use weeknav_core::probe::HttpProbe;

/// Builds the HEAD probe with the configured timeouts.
fn probe_from(cfg: &NavConfig) -> HttpProbe {
    HttpProbe::new(cfg.connect_timeout(), cfg.request_timeout())
}
