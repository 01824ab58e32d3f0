use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A single field value as seen by the sorter.
///
/// Typed entities map their fields onto these variants; free-form JSON
/// records map their values structurally (arrays and objects become their
/// JSON text).
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    /// Missing or null. Compares as the empty string.
    Null,
    Text(Cow<'a, str>),
    /// An exact integer. Ids and counts past 2^53 stay distinct.
    Integer(i128),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl<'a> SortValue<'a> {
    /// Creates a text value.
    pub fn text(s: impl Into<Cow<'a, str>>) -> Self {
        Self::Text(s.into())
    }

    /// The string form used when no more specific comparison applies.
    #[must_use]
    pub fn coerce_to_string(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s.as_ref()),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Date(d) => Cow::Owned(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for SortValue<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for SortValue<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<f64> for SortValue<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for SortValue<'_> {
    fn from(n: i64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<u64> for SortValue<'_> {
    fn from(n: u64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<i32> for SortValue<'_> {
    fn from(n: i32) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<u32> for SortValue<'_> {
    fn from(n: u32) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<bool> for SortValue<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDate> for SortValue<'_> {
    fn from(d: NaiveDate) -> Self {
        match d.and_hms_opt(0, 0, 0) {
            Some(midnight) => Self::Date(midnight.and_utc()),
            None => Self::Null,
        }
    }
}

impl<'a, T: Into<SortValue<'a>>> From<Option<T>> for SortValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<'a> From<&'a Value> for SortValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else {
                    n.as_f64().map_or_else(|| Self::text(n.to_string()), Self::Number)
                }
            }
            Value::String(s) => Self::Text(Cow::Borrowed(s.as_str())),
            Value::Array(_) | Value::Object(_) => Self::text(value.to_string()),
        }
    }
}

/// Keyed access to a record's fields.
///
/// Unknown keys return [`SortValue::Null`]; the sorter never fails on a
/// missing field.
pub trait Sortable {
    /// Returns the value of `key` on this record.
    fn sort_value(&self, key: &str) -> SortValue<'_>;
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        (**self).sort_value(key)
    }
}

/// Keys starting with `/` are JSON pointers; anything else is a top-level field.
impl Sortable for Value {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        let field = if key.starts_with('/') {
            self.pointer(key)
        } else {
            self.get(key)
        };
        field.map_or(SortValue::Null, SortValue::from)
    }
}

impl Sortable for Map<String, Value> {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        self.get(key).map_or(SortValue::Null, SortValue::from)
    }
}

impl<V, S> Sortable for HashMap<String, V, S>
where
    for<'v> &'v V: Into<SortValue<'v>>,
    S: BuildHasher,
{
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        self.get(key).map_or(SortValue::Null, Into::into)
    }
}

impl<V> Sortable for BTreeMap<String, V>
where
    for<'v> &'v V: Into<SortValue<'v>>,
{
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        self.get(key).map_or(SortValue::Null, Into::into)
    }
}
