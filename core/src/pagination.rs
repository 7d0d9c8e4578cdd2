//! Page selection for the todo collection.
//!
//! Pure functions: query parameters in, a validated [`PageRequest`] out.
//! Out-of-range or unparsable values silently fall back to the defaults
//! instead of failing the request.

use std::ops::Range;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

/// A validated page request. `page >= 1`, `1 <= per_page <= MAX_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a request, replacing invalid values with the defaults.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            per_page: if (1..=MAX_PER_PAGE).contains(&per_page) {
                per_page
            } else {
                DEFAULT_PER_PAGE
            },
        }
    }

    /// Parse raw `page` / `per_page` query values.
    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self::new(parse_or_zero(page), parse_or_zero(per_page))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.per_page)
    }

    /// Index range of this page within `total` records, clamped to
    /// `[0, total]`. Empty when the page lies past the end.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(total);
        let end = start.saturating_add(self.per_page).min(total);
        start..end
    }
}

/// `ceil(total / per_page)`, never less than one page.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if total == 0 || per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page)
}

// Zero is rejected by `PageRequest::new`, so it doubles as "invalid".
fn parse_or_zero(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.page(), 1);
        assert_eq!(req.per_page(), 10);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        for (page, per_page) in [
            ("0", "0"),
            ("-1", "-5"),
            ("abc", "ten"),
            ("", "101"),
            ("1.5", "2.0"),
        ] {
            let req = PageRequest::from_query(Some(page), Some(per_page));
            assert_eq!(req, PageRequest::default(), "page={page} per_page={per_page}");
        }
    }

    #[test]
    fn valid_values_are_kept() {
        let req = PageRequest::from_query(Some("3"), Some("100"));
        assert_eq!(req.page(), 3);
        assert_eq!(req.per_page(), 100);

        let req = PageRequest::from_query(Some("2"), Some("1"));
        assert_eq!(req.per_page(), 1);
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(35, 10), 4);
    }

    #[test]
    fn bounds_clamp_to_total() {
        assert_eq!(PageRequest::new(1, 10).bounds(35), 0..10);
        assert_eq!(PageRequest::new(4, 10).bounds(35), 30..35);
        assert_eq!(PageRequest::new(5, 10).bounds(35), 35..35);
        assert_eq!(PageRequest::new(1, 10).bounds(0), 0..0);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let req = PageRequest::new(usize::MAX, 100);
        assert!(req.bounds(5).is_empty());
    }
}
