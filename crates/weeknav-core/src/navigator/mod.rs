//! Navigation resolution: what Previous, Next, and Home point at.
//!
//! A [`Navigator`] is bound once for the current page and then resolves
//! button presses into destination URLs. The behavior is dispatched on the
//! page identity, one binding function per variant:
//!
//! - week page: Previous/Next target the adjacent week, verified by an
//!   existence probe at resolve time, falling back to the landing page;
//! - landing page: Previous targets the *last* (most recent) existing week
//!   and Next the *first* — the inversion is intentional ("go back in time"
//!   vs "start from the beginning") and no probe runs at resolve time;
//! - any other page: Previous/Next go straight to the landing page.
//!
//! Home always resolves to the landing page, for every identity.

use anyhow::Result;

use crate::identity::PageIdentity;
use crate::probe::ExistenceProbe;
use crate::range::discover_week_range;
use crate::site::{week_page, SiteLayout};

/// The three navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Prev,
    Next,
    Home,
}

/// Per-identity state prepared at bind time.
#[derive(Debug)]
enum Plan {
    Week {
        /// Candidate URL for week w-1; absent when the week number cannot
        /// be decremented (a week-0 page's predecessor cannot exist).
        prev_url: Option<String>,
        /// Candidate URL for week w+1.
        next_url: String,
    },
    Index {
        /// URL of the earliest existing week, if discovery found any.
        first_url: Option<String>,
        /// URL of the latest existing week, if discovery found any.
        last_url: Option<String>,
    },
    Other,
}

/// Resolves button presses for one page view.
#[derive(Debug)]
pub struct Navigator<P> {
    probe: P,
    index_url: String,
    plan: Plan,
}

impl<P: ExistenceProbe> Navigator<P> {
    /// Binds navigation behavior for the page with the given identity.
    ///
    /// For the landing page this runs the full week range discovery for
    /// `discovery_year` before returning; the other identities bind without
    /// touching the network.
    pub async fn bind(
        identity: PageIdentity,
        layout: &SiteLayout,
        discovery_year: u32,
        probe: P,
    ) -> Result<Self> {
        let index_url = layout.index_url()?;
        let plan = match identity {
            PageIdentity::Week { week, year } => bind_week_page(layout, week, year)?,
            PageIdentity::Index => bind_index_page(&probe, layout, discovery_year).await?,
            PageIdentity::Other => Plan::Other,
        };
        Ok(Self {
            probe,
            index_url,
            plan,
        })
    }

    /// Resolves a button press to a destination URL.
    ///
    /// `None` means the press is a no-op (landing page with no existing
    /// weeks). On week pages, Previous/Next probe their candidate here and
    /// fall back to the landing page when it does not exist.
    pub async fn resolve(&self, button: Button) -> Option<String> {
        match (&self.plan, button) {
            (_, Button::Home) => Some(self.index_url.clone()),
            (Plan::Week { prev_url, .. }, Button::Prev) => {
                Some(self.probe_or_index(prev_url.as_deref()).await)
            }
            (Plan::Week { next_url, .. }, Button::Next) => {
                Some(self.probe_or_index(Some(next_url)).await)
            }
            (Plan::Index { last_url, .. }, Button::Prev) => last_url.clone(),
            (Plan::Index { first_url, .. }, Button::Next) => first_url.clone(),
            (Plan::Other, _) => Some(self.index_url.clone()),
        }
    }

    async fn probe_or_index(&self, candidate: Option<&str>) -> String {
        match candidate {
            Some(url) if self.probe.exists(url).await => url.to_string(),
            _ => self.index_url.clone(),
        }
    }
}

fn bind_week_page(layout: &SiteLayout, week: u32, year: u32) -> Result<Plan> {
    let prev_url = week
        .checked_sub(1)
        .map(|w| layout.resolve(&week_page(w, year)))
        .transpose()?;
    let next_url = layout.resolve(&week_page(week + 1, year))?;
    Ok(Plan::Week { prev_url, next_url })
}

async fn bind_index_page<P: ExistenceProbe>(
    probe: &P,
    layout: &SiteLayout,
    year: u32,
) -> Result<Plan> {
    let range = discover_week_range(probe, layout, year).await?;
    let first_url = range
        .first
        .map(|w| layout.resolve(&week_page(w, year)))
        .transpose()?;
    let last_url = range
        .last
        .map(|w| layout.resolve(&week_page(w, year)))
        .transpose()?;
    Ok(Plan::Index {
        first_url,
        last_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::tests::StubProbe;

    const YEAR: u32 = 2025;

    fn layout() -> SiteLayout {
        SiteLayout::new("http://reports.test/").unwrap()
    }

    fn week(week: u32) -> PageIdentity {
        PageIdentity::Week { week, year: YEAR }
    }

    async fn bind(identity: PageIdentity, probe: StubProbe) -> Navigator<StubProbe> {
        Navigator::bind(identity, &layout(), YEAR, probe)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn week_page_next_to_existing_neighbor() {
        let probe = StubProbe::with_weeks(YEAR, &[47]);
        let nav = bind(week(46), probe).await;
        assert_eq!(
            nav.resolve(Button::Next).await.as_deref(),
            Some("http://reports.test/kw_47_2025.html")
        );
    }

    #[tokio::test]
    async fn week_page_prev_missing_falls_back_to_index() {
        let probe = StubProbe::with_weeks(YEAR, &[47]);
        let nav = bind(week(46), probe).await;
        assert_eq!(
            nav.resolve(Button::Prev).await.as_deref(),
            Some("http://reports.test/index.html")
        );
    }

    #[tokio::test]
    async fn week_page_prev_to_existing_neighbor() {
        let probe = StubProbe::with_weeks(YEAR, &[45]);
        let nav = bind(week(46), probe).await;
        assert_eq!(
            nav.resolve(Button::Prev).await.as_deref(),
            Some("http://reports.test/kw_45_2025.html")
        );
    }

    #[tokio::test]
    async fn week_page_binding_issues_no_probes() {
        let probe = StubProbe::with_weeks(YEAR, &[45, 47]);
        let nav = bind(week(46), probe).await;
        assert_eq!(nav.probe.calls(), 0);
        nav.resolve(Button::Next).await;
        assert_eq!(nav.probe.calls(), 1);
    }

    #[tokio::test]
    async fn index_prev_is_last_week_next_is_first_week() {
        let probe = StubProbe::with_weeks(YEAR, &[3, 5, 9]);
        let nav = bind(PageIdentity::Index, probe).await;
        // Intentional inversion: Previous = most recent, Next = earliest.
        assert_eq!(
            nav.resolve(Button::Prev).await.as_deref(),
            Some("http://reports.test/kw_9_2025.html")
        );
        assert_eq!(
            nav.resolve(Button::Next).await.as_deref(),
            Some("http://reports.test/kw_3_2025.html")
        );
    }

    #[tokio::test]
    async fn index_with_no_weeks_is_noop() {
        let probe = StubProbe::with_weeks(YEAR, &[]);
        let nav = bind(PageIdentity::Index, probe).await;
        assert_eq!(nav.resolve(Button::Prev).await, None);
        assert_eq!(nav.resolve(Button::Next).await, None);
        // Home still works.
        assert_eq!(
            nav.resolve(Button::Home).await.as_deref(),
            Some("http://reports.test/index.html")
        );
    }

    #[tokio::test]
    async fn index_resolve_issues_no_probes_after_binding() {
        let probe = StubProbe::with_weeks(YEAR, &[3, 5, 9]);
        let nav = bind(PageIdentity::Index, probe).await;
        let after_discovery = nav.probe.calls();
        nav.resolve(Button::Prev).await;
        nav.resolve(Button::Next).await;
        assert_eq!(nav.probe.calls(), after_discovery);
    }

    #[tokio::test]
    async fn other_page_goes_home_without_probing() {
        let probe = StubProbe::with_urls(&[]);
        let nav = bind(PageIdentity::Other, probe).await;
        for button in [Button::Prev, Button::Next, Button::Home] {
            assert_eq!(
                nav.resolve(button).await.as_deref(),
                Some("http://reports.test/index.html")
            );
        }
        assert_eq!(nav.probe.calls(), 0);
    }

    #[tokio::test]
    async fn home_is_idempotent() {
        let probe = StubProbe::with_weeks(YEAR, &[46]);
        let nav = bind(week(46), probe).await;
        let first = nav.resolve(Button::Home).await;
        let second = nav.resolve(Button::Home).await;
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("http://reports.test/index.html"));
    }

    #[tokio::test]
    async fn week_zero_prev_skips_probe_and_goes_home() {
        let probe = StubProbe::with_weeks(YEAR, &[1]);
        let nav = bind(week(0), probe).await;
        assert_eq!(
            nav.resolve(Button::Prev).await.as_deref(),
            Some("http://reports.test/index.html")
        );
        assert_eq!(nav.probe.calls(), 0);
    }
}
