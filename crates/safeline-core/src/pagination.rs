//! Page slicing for list screens.
//!
//! [`Pagination`] keeps only the page cursor and the page size; the items
//! are passed in on every call, so the same state keeps working when the
//! underlying list is re-filtered or shrinks after a delete.

use std::fmt;

/// Rows per page on every list screen.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page cursor over a list of fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    requested_page: usize,
    page_size: usize,
}

/// One rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number actually shown
    pub current_page: usize,
    /// Total number of pages, at least 1
    pub total_pages: usize,
    /// Total number of items across all pages
    pub total_items: usize,
    /// Items on this page
    pub items: &'a [T],
}

impl Pagination {
    /// Start on page 1. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            requested_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page last asked for. It may lie past the end if the list shrank since
    /// it was set; [`Pagination::current_page`] gives the page shown.
    pub fn requested_page(&self) -> usize {
        self.requested_page
    }

    /// `max(1, ceil(item_count / page_size))`.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    /// Page shown for a list of `item_count` items, always within
    /// `[1, total_pages]`.
    pub fn current_page(&self, item_count: usize) -> usize {
        self.requested_page.clamp(1, self.total_pages(item_count))
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn on_page_change(&mut self, page: usize, item_count: usize) {
        self.requested_page = page.clamp(1, self.total_pages(item_count));
    }

    /// Commit the downward correction after the list shrank.
    pub fn sync(&mut self, item_count: usize) {
        self.requested_page = self.current_page(item_count);
    }

    /// Items on the current page.
    pub fn current_data<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.current_page(items.len());
        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (page * self.page_size).min(items.len());
        &items[start..end]
    }

    /// Current page together with its items and totals.
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        Page {
            current_page: self.current_page(items.len()),
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
            items: self.current_data(items),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {}/{} ({} items)",
            self.current_page, self.total_pages, self.total_items
        )
    }
}
