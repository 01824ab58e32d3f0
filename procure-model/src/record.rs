use procure_sort::{SortValue, Sortable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A list row without a typed shape.
///
/// Wraps whatever JSON object the backend returned. Field lookups take
/// either a top-level field name (`"title"`) or a JSON pointer (`"/meta/author"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    data: Value,
}

impl Record {
    #[must_use]
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.data
    }

    /// Looks up a field by name or JSON pointer.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        if key.starts_with('/') {
            self.data.pointer(key)
        } else {
            self.data.get(key)
        }
    }

    /// Extract a string value by field name or JSON pointer.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// Extract a boolean value by field name or JSON pointer.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value by field name or JSON pointer.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }
}

impl From<Value> for Record {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

impl Sortable for Record {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        self.data.sort_value(key)
    }
}
