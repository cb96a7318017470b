//! Page arithmetic for listing responses

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

/// 1-based page selection over an already-filtered listing.
///
/// Invalid values clamp to the defaults rather than erroring, matching how
/// the query parameters behave: a page or size of zero, or text that does
/// not parse as a positive integer, falls back to page 1 / 10 per page.
/// A page past the end of the data selects an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
        }
    }

    /// Build from raw query-parameter text. `None`, non-numeric, and
    /// non-positive values all clamp to the defaults.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            per_page: parse_positive(per_page).unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Select this page from the listing: `start = (page-1) * per_page`,
    /// `end = start + per_page`, both clamped to the slice bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}
