//! Page-number pagination for list endpoints.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl Pagination {
    pub fn from_query(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self { page: page.unwrap_or(1), page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE) }
    }

    /// Clamp to sane bounds. Returns `(page, page_size)` with `page >= 1`.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        (page, page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<T>,
}

/// Page 1 always exists; later pages must fall within `count`.
pub fn page_exists(count: u64, page: u64, page_size: u64) -> bool {
    page == 1
        || page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
            .map_or(false, |offset| offset < count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (page, size) = Pagination { page: 0, page_size: 0 }.normalize();
        assert_eq!(page, 1);
        assert_eq!(size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (page, size) = Pagination { page: 5, page_size: 1000 }.normalize();
        assert_eq!(page, 5);
        assert_eq!(size, 100);
    }

    #[test]
    fn query_defaults() {
        let p = Pagination::from_query(None, None);
        assert_eq!((p.page, p.page_size), (1, 20));
    }

    #[test]
    fn page_bounds() {
        assert!(page_exists(0, 1, 20));
        assert!(page_exists(21, 2, 20));
        assert!(!page_exists(20, 2, 20));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert!(!page_exists(10, u64::MAX, 100));
        assert!(!page_exists(10, 0, 100));
    }
}
