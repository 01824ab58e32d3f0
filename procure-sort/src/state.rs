use crate::order::SortOrder;
use crate::sort::sorted_refs;
use crate::value::Sortable;
use serde::{Deserialize, Serialize};

/// The column a list is currently sorted by, owned by the list view.
///
/// Clicking a column header calls [`SortState::toggle`]: the same column
/// flips direction, a different column starts ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    key: Option<String>,
    order: SortOrder,
}

impl SortState {
    /// Unsorted state; rows keep their fetched order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn by(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: Some(key.into()),
            order,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Selects `key`, flipping the direction if it is already selected.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.order = self.order.reverse();
        } else {
            self.key = Some(key.to_string());
            self.order = SortOrder::Asc;
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.order = SortOrder::Asc;
    }

    /// Orders `records` by the current selection.
    #[must_use]
    pub fn apply<'a, T: Sortable>(&self, records: &'a [T]) -> Vec<&'a T> {
        match &self.key {
            Some(key) => sorted_refs(records, key, self.order),
            None => records.iter().collect(),
        }
    }
}
