//! `weeknav range [--year N]` – discover the first and last existing week.

use anyhow::Result;
use weeknav_core::config::NavConfig;
use weeknav_core::range::discover_week_range;
use weeknav_core::site::SiteLayout;

use super::probe_from;

pub async fn run_range(cfg: &NavConfig, year: Option<u32>) -> Result<()> {
    let year = year.unwrap_or(cfg.year);
    let layout = SiteLayout::new(&cfg.base_url)?;
    let probe = probe_from(cfg);

    let range = discover_week_range(&probe, &layout, year).await?;
    match (range.first, range.last) {
        (Some(first), Some(last)) => {
            println!("year {year}: first week {first}, last week {last}");
        }
        _ => println!("year {year}: no weekly reports found"),
    }
    Ok(())
}
