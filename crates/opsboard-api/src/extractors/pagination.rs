//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use opsboard_core::types::PageRequest;

/// Optional `page`/`limit` query parameters.
///
/// When neither is present the endpoint returns the full result set;
/// when either is, defaults fill the gap and a pagination block is
/// returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page (max: 100).
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, or `None` when pagination was not
    /// requested at all.
    pub fn page_request(&self) -> Option<PageRequest> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }
        Some(PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(10),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_params_mean_no_pagination() {
        assert!(PaginationParams::default().page_request().is_none());
    }

    #[test]
    fn test_partial_params_get_defaults() {
        let page = PaginationParams {
            page: Some(2),
            limit: None,
        }
        .page_request()
        .unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
    }
}
