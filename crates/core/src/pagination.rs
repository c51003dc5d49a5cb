//! Page/limit pagination shared by every listing endpoint.
//!
//! Inputs arrive as raw query-string values. Anything that does not parse
//! as an integer falls back to the default, and both values are floored at
//! one. There is no upper bound on `limit`.

use serde::Serialize;

/// Page number used when the caller omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// A normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Build from raw `?page=&limit=` values.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_or(page, DEFAULT_PAGE),
            parse_or(limit, DEFAULT_LIMIT),
        )
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Total number of pages needed to hold `total_items` at `limit` per page.
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    let limit = limit.max(1);
    (total_items - 1) / limit + 1
}

/// One page of results plus the counters a client needs to navigate.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: i64, request: PageRequest) -> Self {
        let total_pages = total_pages(total_items, request.limit);
        Self {
            items,
            total_items,
            page: request.page,
            limit: request.limit,
            total_pages,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        assert_eq!(PageRequest::from_raw(None, None), PageRequest::new(1, 10));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(
            PageRequest::from_raw(Some("two"), Some("")),
            PageRequest::new(1, 10)
        );
    }

    #[test]
    fn floors_at_one() {
        let req = PageRequest::from_raw(Some("-3"), Some("0"));
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn large_limit_is_not_capped() {
        assert_eq!(PageRequest::from_raw(None, Some("5000")).limit, 5000);
    }

    #[test]
    fn offset_for_second_page() {
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn total_pages_with_huge_limit() {
        assert_eq!(total_pages(2, i64::MAX), 1);
        let page = Page::new(
            vec![1, 2],
            2,
            PageRequest::from_raw(Some("1"), Some("9223372036854775807")),
        );
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);
    }

    #[test]
    fn page_flags() {
        let page = Page::new(vec![1, 2, 3, 4, 5], 15, PageRequest::new(2, 10));
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
        assert!(page.has_prev_page);
    }
}
