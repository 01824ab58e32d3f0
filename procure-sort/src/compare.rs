use crate::value::SortValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// A field value with every coercion the comparison policy may need,
/// computed once per record instead of once per comparison.
#[derive(Debug, Clone)]
pub(crate) struct SortKey {
    text: String,
    /// Lowercased `text`, present only for string (and null) values.
    folded: Option<String>,
    number: Option<f64>,
    /// Exact form of integral numbers, compared before `number`.
    integer: Option<i128>,
    date: Option<DateTime<Utc>>,
}

impl SortKey {
    pub(crate) fn new(value: &SortValue<'_>) -> Self {
        match value {
            SortValue::Null => Self {
                text: String::new(),
                folded: Some(String::new()),
                number: None,
                integer: None,
                date: None,
            },
            SortValue::Text(s) => Self {
                text: s.to_string(),
                folded: Some(s.to_lowercase()),
                number: parse_number(s),
                integer: parse_integer(s),
                date: parse_date(s),
            },
            SortValue::Integer(i) => Self {
                text: value.coerce_to_string().into_owned(),
                folded: None,
                number: Some(*i as f64),
                integer: Some(*i),
                date: None,
            },
            SortValue::Number(n) => Self {
                text: value.coerce_to_string().into_owned(),
                folded: None,
                number: n.is_finite().then_some(*n),
                integer: integral(*n),
                date: None,
            },
            SortValue::Bool(_) => Self {
                text: value.coerce_to_string().into_owned(),
                folded: None,
                number: None,
                integer: None,
                date: None,
            },
            SortValue::Date(d) => Self {
                text: value.coerce_to_string().into_owned(),
                folded: None,
                number: None,
                integer: None,
                date: Some(*d),
            },
        }
    }

    /// Ascending comparison of two prepared keys.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.integer, other.integer) {
            return a.cmp(&b);
        }
        if let (Some(a), Some(b)) = (self.number, other.number) {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        if let (Some(a), Some(b)) = (self.date, other.date) {
            return a.cmp(&b);
        }
        if let (Some(a), Some(b)) = (&self.folded, &other.folded) {
            return a.cmp(b);
        }
        self.text.cmp(&other.text)
    }
}

/// Compares two field values in ascending order under the mixed-type policy.
///
/// ```
/// use procure_sort::{compare_values, SortValue};
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_values(&"2".into(), &"10".into()), Ordering::Less);
/// assert_eq!(compare_values(&"apple".into(), &"Banana".into()), Ordering::Less);
/// assert_eq!(compare_values(&SortValue::Null, &"a".into()), Ordering::Less);
/// ```
#[must_use]
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    SortKey::new(a).compare(&SortKey::new(b))
}

/// Reads a finite number from text. Empty text is not a number.
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Reads an exact integer from text, e.g. a large numeric id.
fn parse_integer(s: &str) -> Option<i128> {
    s.trim().parse::<i128>().ok()
}

/// The exact integer a float holds, when it holds one in `i128` range.
fn integral(n: f64) -> Option<i128> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < 1e38).then(|| n as i128)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
        }
    }
    None
}
