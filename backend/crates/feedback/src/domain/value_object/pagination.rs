//! Pagination
//!
//! Limit/offset paging with a `hasMore` flag computed as
//! `offset + limit < total` over the filtered set.

use serde::Serialize;

/// Largest page a client may request
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    /// Build from raw query values, falling back to `default_limit`.
    ///
    /// Limits are clamped to `1..=MAX_PAGE_LIMIT`; negative offsets
    /// become 0. Absent values take the defaults.
    pub fn from_query(limit: Option<i64>, offset: Option<i64>, default_limit: i64) -> Self {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(default_limit)
            .min(MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        Self { limit, offset }
    }
}

/// Pagination metadata returned alongside a page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl PageInfo {
    pub fn new(page: PageRequest, total: i64) -> Self {
        Self {
            total,
            limit: page.limit,
            offset: page.offset,
            has_more: page.offset + page.limit < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let page = PageRequest::from_query(None, None, 10);
        assert_eq!(page, PageRequest { limit: 10, offset: 0 });

        let page = PageRequest::from_query(Some(0), Some(-5), 20);
        assert_eq!(page, PageRequest { limit: 20, offset: 0 });

        let page = PageRequest::from_query(Some(5000), Some(40), 20);
        assert_eq!(page, PageRequest { limit: 100, offset: 40 });
    }

    #[test]
    fn test_has_more_algebra() {
        let page = PageRequest { limit: 10, offset: 0 };
        assert!(PageInfo::new(page, 11).has_more);
        assert!(!PageInfo::new(page, 10).has_more);
        assert!(!PageInfo::new(page, 0).has_more);

        // Last partial page
        let page = PageRequest { limit: 10, offset: 10 };
        assert!(!PageInfo::new(page, 15).has_more);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let info = PageInfo::new(PageRequest { limit: 10, offset: 0 }, 25);
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["hasMore"], true);
        assert_eq!(json["total"], 25);
        assert!(json.get("has_more").is_none());
    }
}
