//! `weeknav identify <url>` – classify a page URL.

use anyhow::Result;
use weeknav_core::identity::{parse_identity, PageIdentity};
use weeknav_core::site;

pub fn run_identify(url: &str) -> Result<()> {
    let file = site::page_file(url)?;
    match parse_identity(&file) {
        PageIdentity::Week { week, year } => {
            println!("week page: week {week}, year {year}");
        }
        PageIdentity::Index => println!("landing page"),
        PageIdentity::Other => println!("other page"),
    }
    Ok(())
}
