//! Tab filtering and pagination for list views.

use crate::state::SortState;
use crate::value::Sortable;
use serde::{Deserialize, Serialize};

/// Rows-per-page choices offered by list tables.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// A status tab over a list: everything, or one status only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTab<S> {
    All,
    Only(S),
}

impl<S> Default for StatusTab<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: PartialEq> StatusTab<S> {
    #[must_use]
    pub fn matches(&self, status: &S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Keeps the records whose status matches this tab, in input order.
    pub fn filter<'a, T>(&self, records: &'a [T], status_of: impl Fn(&T) -> S) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| self.matches(&status_of(*record)))
            .collect()
    }
}

impl<S> From<Option<S>> for StatusTab<S> {
    fn from(status: Option<S>) -> Self {
        status.map_or(Self::All, Self::Only)
    }
}

/// Zero-based page position over a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Creates a pagination at `page`. A page size of zero is treated as one.
    #[must_use]
    pub fn new(page: usize, rows_per_page: usize) -> Self {
        Self {
            page,
            rows_per_page: rows_per_page.max(1),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.rows_per_page)
    }

    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page)
    }

    /// The rows on the current page. Past the last page this is empty.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.rows_per_page).min(items.len());
        &items[start..end]
    }
}

/// One rendered page of a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub rows: Vec<&'a T>,
    /// Number of records after filtering, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

/// Filter, sort and page state for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView<S> {
    pub tab: StatusTab<S>,
    pub sort: SortState,
    pub pagination: Pagination,
}

impl<S> Default for ListView<S> {
    fn default() -> Self {
        Self {
            tab: StatusTab::All,
            sort: SortState::default(),
            pagination: Pagination::default(),
        }
    }
}

impl<S: PartialEq> ListView<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches tab and returns to the first page.
    pub fn set_tab(&mut self, tab: StatusTab<S>) {
        self.tab = tab;
        self.pagination.set_page(0);
    }

    /// Toggles the sort column and returns to the first page.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
        self.pagination.set_page(0);
    }

    /// Runs filter, then sort, then pagination over `records`.
    pub fn render<'a, T: Sortable>(&self, records: &'a [T], status_of: impl Fn(&T) -> S) -> Page<'a, T> {
        let filtered = self.tab.filter(records, status_of);
        let sorted: Vec<&'a T> = self.sort.apply(&filtered).into_iter().copied().collect();
        let total = sorted.len();
        Page {
            rows: self.pagination.slice(&sorted).to_vec(),
            total,
            page: self.pagination.page(),
            page_count: self.pagination.page_count(total),
        }
    }
}
