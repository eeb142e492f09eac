//! Offset-based pagination over a provider dataset.
//!
//! The provider pages datasets by `offset`/`limit`, so a page here is just a
//! 1-based page number translated into an offset window plus the total item
//! count needed to render page links.
//!
//! # Usage
//!
//! ```rust,ignore
//! let window = PageWindow::new(page, DEFAULT_PAGE_SIZE);
//! let items = provider.list_comments(&dataset_id, window.offset(), window.limit()).await?;
//! let total_pages = total_pages(total_items, window.per_page);
//! ```

use serde::Serialize;

/// Page size used by the result views.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Number of pages needed to show `total_items`. Zero items means zero pages.
pub fn total_pages(total_items: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
}

impl PageWindow {
    /// Page numbers below 1 are clamped to the first page.
    pub fn new(page: i64, per_page: u64) -> Self {
        PageWindow {
            page: page.max(1) as u64,
            per_page,
        }
    }

    /// First page with the default size.
    pub fn first() -> Self {
        PageWindow::new(1, DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first()
    }
}

/// Page metadata shown next to a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(window: PageWindow, total_items: u64) -> Self {
        PageInfo {
            page: window.page,
            per_page: window.per_page,
            total_items,
            total_pages: total_pages(total_items, window.per_page),
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}
