//! Pagination primitives shared by paged list operations.
//!
//! Callers pass a 1-based page number; the storage ports work on an
//! explicit `(offset, limit)` pair, so the translation lives here.

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard upper bound on page size, regardless of what the caller asks for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request (1-based page number).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub page: i64,
    pub page_size: i64,
}

impl PageQuery {
    /// Build a page request, rejecting out-of-range values.
    ///
    /// Both `page` and `page_size` must be at least 1. The page size is
    /// additionally capped at [`MAX_PAGE_SIZE`].
    pub fn new(page: i64, page_size: i64) -> Result<Self, String> {
        if page < 1 {
            return Err(format!("page must be >= 1, got {page}"));
        }
        if page_size < 1 {
            return Err(format!("page_size must be >= 1, got {page_size}"));
        }
        Ok(Self {
            page,
            page_size: page_size.min(MAX_PAGE_SIZE),
        })
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// One page of results plus the total match count.
///
/// `total` counts every row matching the filter, not just this page.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub total: i64,
    pub items: Vec<T>,
}

/// Clamp a user-provided limit into the `1..=max` range.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
