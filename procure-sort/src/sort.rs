use crate::compare::SortKey;
use crate::merge::merge_sort_indices;
use crate::order::SortOrder;
use crate::value::Sortable;

/// Returns references to `records` ordered by the field `key`.
///
/// The input slice is left untouched. Records whose field is missing or
/// null sort as if the field held `""`. Equal values keep their relative
/// input order in both directions.
#[must_use]
pub fn sorted_refs<'a, T: Sortable>(records: &'a [T], key: &str, order: SortOrder) -> Vec<&'a T> {
    let keys: Vec<SortKey> = records
        .iter()
        .map(|record| SortKey::new(&record.sort_value(key)))
        .collect();

    merge_sort_indices(keys.len(), |a, b| order.apply(keys[a].compare(&keys[b])))
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Returns a new, sorted copy of `records`.
///
/// ```
/// use procure_sort::{sort_records, SortOrder};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"id": 3, "name": "c"}),
///     json!({"id": 1, "name": "a"}),
///     json!({"id": 2, "name": "b"}),
/// ];
/// let sorted = sort_records(&rows, "id", SortOrder::Asc);
/// let ids: Vec<_> = sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect();
/// assert_eq!(ids, [1, 2, 3]);
/// ```
#[must_use]
pub fn sort_records<T: Sortable + Clone>(records: &[T], key: &str, order: SortOrder) -> Vec<T> {
    sorted_refs(records, key, order).into_iter().cloned().collect()
}
