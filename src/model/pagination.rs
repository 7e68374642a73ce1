//! Page arithmetic shared by every paginated listing.

use serde::{Deserialize, Serialize};

/// Validated page request. `page` is 1-based and `limit` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: i64 = 20;
    pub const MAX_LIMIT: i64 = 100;
    /// Keeps `offset()` within `i64` for every accepted limit.
    pub const MAX_PAGE: i64 = i64::MAX / Self::MAX_LIMIT;

    /// Returns `None` when `page` is outside `1..=MAX_PAGE` or `limit` is
    /// outside `1..=MAX_LIMIT`.
    pub fn new(page: i64, limit: i64) -> Option<Self> {
        if !(1..=Self::MAX_PAGE).contains(&page) || !(1..=Self::MAX_LIMIT).contains(&limit) {
            return None;
        }
        Some(Self { page, limit })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// `limit` must be positive; callers validate through [`PageRequest`].
    pub fn new(page: i64, limit: i64, total_count: i64) -> Self {
        debug_assert!(limit > 0, "page limit must be positive");

        let total_pages = if limit > 0 {
            (total_count + limit - 1) / limit
        } else {
            0
        };

        Self {
            page,
            limit,
            total_count,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: i64) -> Self {
        Self {
            items,
            pagination: PageInfo::new(request.page(), request.limit(), total_count),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_listing_has_no_pages() {
        let info = PageInfo::new(1, 20, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next_page);
        assert!(!info.has_prev_page);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageInfo::new(1, 10, 25).total_pages, 3);
        assert_eq!(PageInfo::new(1, 10, 30).total_pages, 3);
        assert_eq!(PageInfo::new(1, 10, 31).total_pages, 4);
    }

    #[test]
    fn navigation_flags() {
        let first = PageInfo::new(1, 10, 25);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let middle = PageInfo::new(2, 10, 25);
        assert!(middle.has_next_page);
        assert!(middle.has_prev_page);

        let last = PageInfo::new(3, 10, 25);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn page_past_the_end() {
        let info = PageInfo::new(7, 10, 25);
        assert!(!info.has_next_page);
        assert!(info.has_prev_page);
    }

    #[test]
    fn page_request_validation() {
        assert!(PageRequest::new(0, 10).is_none());
        assert!(PageRequest::new(1, 0).is_none());
        assert!(PageRequest::new(1, PageRequest::MAX_LIMIT + 1).is_none());

        let req = PageRequest::new(3, 15).unwrap();
        assert_eq!(req.offset(), 30);
        assert_eq!(PageRequest::default().offset(), 0);
    }

    #[test]
    fn huge_page_is_rejected() {
        assert!(PageRequest::new(i64::MAX, 1).is_none());
        assert!(PageRequest::new(PageRequest::MAX_PAGE + 1, 1).is_none());

        let last = PageRequest::new(PageRequest::MAX_PAGE, PageRequest::MAX_LIMIT).unwrap();
        assert_eq!(last.offset(), (PageRequest::MAX_PAGE - 1) * PageRequest::MAX_LIMIT);
        assert!(last.offset() > 0);
    }

    #[test]
    fn serializes_camel_case() {
        let page = Paginated::new(vec![1, 2], PageRequest::new(1, 2).unwrap(), 3);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pagination"]["totalCount"], 3);
        assert_eq!(json["pagination"]["totalPages"], 2);
        assert_eq!(json["pagination"]["hasNextPage"], true);
        assert_eq!(json["pagination"]["hasPrevPage"], false);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}
