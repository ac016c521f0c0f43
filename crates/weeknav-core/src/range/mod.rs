//! Week range discovery for the landing page.
//!
//! Scans weeks 1..=53 for a given year and records the first and last week
//! whose page exists. The probes run strictly in sequence, each awaited
//! before the next is issued, so the scan costs up to 53 round trips. There
//! is no early termination: weeks may in principle exist non-contiguously,
//! so every candidate is checked.

use anyhow::Result;

use crate::probe::ExistenceProbe;
use crate::site::{week_page, SiteLayout};

/// Highest ISO week number a year can have.
const MAX_WEEK: u32 = 53;

/// Earliest and latest existing week for a year; both absent when no weekly
/// page exists at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekRange {
    pub first: Option<u32>,
    pub last: Option<u32>,
}

/// Probes every candidate week page for `year` and returns the range found.
///
/// `first` is set once, on the lowest existing week; `last` is overwritten
/// on every hit and ends up at the highest existing week.
pub async fn discover_week_range<P: ExistenceProbe>(
    probe: &P,
    layout: &SiteLayout,
    year: u32,
) -> Result<WeekRange> {
    let mut range = WeekRange::default();
    for week in 1..=MAX_WEEK {
        let url = layout.resolve(&week_page(week, year))?;
        if probe.exists(&url).await {
            if range.first.is_none() {
                range.first = Some(week);
            }
            range.last = Some(week);
        }
    }
    tracing::debug!(
        "week range for {year}: first={:?} last={:?}",
        range.first,
        range.last
    );
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::tests::StubProbe;

    fn layout() -> SiteLayout {
        SiteLayout::new("http://reports.test/").unwrap()
    }

    #[tokio::test]
    async fn finds_first_and_last_across_gaps() {
        let probe = StubProbe::with_weeks(2025, &[3, 5, 9]);
        let range = discover_week_range(&probe, &layout(), 2025).await.unwrap();
        assert_eq!(range.first, Some(3));
        assert_eq!(range.last, Some(9));
    }

    #[tokio::test]
    async fn empty_year_yields_no_range() {
        let probe = StubProbe::with_weeks(2025, &[]);
        let range = discover_week_range(&probe, &layout(), 2025).await.unwrap();
        assert_eq!(range, WeekRange::default());
    }

    #[tokio::test]
    async fn single_week_is_both_first_and_last() {
        let probe = StubProbe::with_weeks(2025, &[53]);
        let range = discover_week_range(&probe, &layout(), 2025).await.unwrap();
        assert_eq!(range.first, Some(53));
        assert_eq!(range.last, Some(53));
    }

    #[tokio::test]
    async fn scan_covers_all_candidate_weeks() {
        let probe = StubProbe::with_weeks(2025, &[10]);
        discover_week_range(&probe, &layout(), 2025).await.unwrap();
        assert_eq!(probe.calls(), 53);
    }
}
