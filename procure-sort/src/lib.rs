//! Generic field sorting for Procure list views.
//!
//! The list screens (proposals, procurements, purchase orders) all order
//! their rows by a user-selected field. This crate provides:
//! - [`Sortable`]: keyed access to a record's field as a [`SortValue`]
//! - [`sort_records`] / [`sorted_refs`]: stable, non-mutating sort by one field
//! - [`compare_values`]: the mixed-type comparison policy on its own
//! - [`SortState`], [`StatusTab`], [`Pagination`], [`ListView`]: the
//!   caller-owned view state that drives a sortable, filterable, paged table
//!
//! Comparison policy for a pair of field values:
//! 1. Missing and null values compare as the empty string.
//! 2. Two values that both read as finite numbers compare numerically;
//!    two integers compare exactly.
//! 3. Two values that both read as calendar dates compare as instants.
//! 4. Two strings compare case-insensitively.
//! 5. Anything else compares by its string form.
//!
//! Sorting never panics, even when that policy is not transitive across a
//! particular input (e.g. `"9"`, `"10"`, `"1a"`).

mod compare;
mod merge;
mod order;
mod sort;
mod state;
mod value;
mod view;

pub use compare::compare_values;
pub use order::{ParseSortOrderError, SortOrder};
pub use sort::{sort_records, sorted_refs};
pub use state::SortState;
pub use value::{SortValue, Sortable};
pub use view::{ListView, Page, Pagination, StatusTab, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
