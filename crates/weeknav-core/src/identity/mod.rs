//! Page identity: classify the current page by its filename.

use crate::site::INDEX_FILE;

/// What kind of page the navigator is running on.
///
/// Computed once per invocation from the URL's final path segment; drives
/// which navigation behavior gets bound for Previous/Next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIdentity {
    /// A weekly report page `kw_<week>_<year>.html`.
    Week { week: u32, year: u32 },
    /// The landing page (`index.html` or an empty path segment).
    Index,
    /// Anything else hosted alongside the reports.
    Other,
}

/// Classifies a filename into a [`PageIdentity`].
///
/// The week pattern is strict: literal `kw_`, 1-2 decimal digits, `_`,
/// exactly 4 decimal digits, `.html`. Leading zeros are accepted and the
/// week value is not range-checked beyond the digit count.
pub fn parse_identity(filename: &str) -> PageIdentity {
    if let Some((week, year)) = parse_week_filename(filename) {
        return PageIdentity::Week { week, year };
    }
    if filename.is_empty() || filename == INDEX_FILE {
        return PageIdentity::Index;
    }
    PageIdentity::Other
}

fn parse_week_filename(filename: &str) -> Option<(u32, u32)> {
    let rest = filename.strip_prefix("kw_")?;
    let rest = rest.strip_suffix(".html")?;
    let (week, year) = rest.split_once('_')?;
    if week.is_empty() || week.len() > 2 || !week.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((week.parse().ok()?, year.parse().ok()?))
}
