//! Offset-based pagination helper.

use serde::Deserialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `page`/`limit` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    /// Apply defaults and clamp both values to a minimum of 1, so a
    /// `page=0` request cannot produce a negative offset.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).max(1);
        (page, limit)
    }
}

/// Computed window into a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Compute offset and page count from a 1-based page number.
pub fn paginate(page: u64, limit: u64, total_count: u64) -> PageWindow {
    let limit = limit.max(1);
    let start_index = page.saturating_sub(1).saturating_mul(limit);
    let total_pages = total_count.div_ceil(limit);

    PageWindow {
        start_index,
        limit,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_twenty_five() {
        let window = paginate(2, 10, 25);
        assert_eq!(
            window,
            PageWindow {
                start_index: 10,
                limit: 10,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn empty_collection_has_no_pages() {
        assert_eq!(paginate(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn normalize_clamps_zero_inputs() {
        let query = PageQuery {
            page: Some(0),
            limit: Some(0),
        };
        assert_eq!(query.normalize(), (1, 1));
    }

    #[test]
    fn normalize_applies_defaults() {
        let query = PageQuery {
            page: None,
            limit: None,
        };
        assert_eq!(query.normalize(), (DEFAULT_PAGE, DEFAULT_LIMIT));
    }
}
