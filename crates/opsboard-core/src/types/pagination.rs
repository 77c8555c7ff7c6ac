//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Maximum page size accepted from the client.
const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
///
/// List endpoints treat pagination as optional: when the client sends
/// neither `page` nor `limit`, the full result set is returned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, page: &PageRequest, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(page.limit)
        };
        Self {
            data,
            total,
            page: page.page,
            limit: page.limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_math() {
        assert_eq!(PageRequest::new(1, 25).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        // Page 0 is normalized to 1.
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PageRequest::new(1, 0).limit, 1);
        assert_eq!(PageRequest::new(1, 1000).limit, 100);
    }

    #[test]
    fn test_total_pages() {
        let page = PageRequest::new(1, 10);
        assert_eq!(PageResponse::<u32>::new(vec![], &page, 0).total_pages, 0);
        assert_eq!(PageResponse::<u32>::new(vec![], &page, 11).total_pages, 2);
        assert_eq!(PageResponse::<u32>::new(vec![], &page, 20).total_pages, 2);
    }
}
