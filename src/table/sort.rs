use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use super::TableRow;
use super::clipboard::value_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Header click cycle: unsorted, ascending, descending, unsorted.
    #[must_use]
    pub fn next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Asc),
            Some(Self::Asc) => Some(Self::Desc),
            Some(Self::Desc) => None,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortValueKind {
    #[default]
    Number,
    Date,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub field: String,
    #[serde(default)]
    pub direction: Option<SortDirection>,
    #[serde(default)]
    pub kind: SortValueKind,
}

impl SortConfig {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection, kind: SortValueKind) -> Self {
        Self {
            field: field.into(),
            direction: Some(direction),
            kind,
        }
    }
}

/// Returns `rows` ordered by `config`. Without a direction the input order is
/// kept. Values that cannot be read as the configured kind sort last in both
/// directions.
#[must_use]
pub fn sort_rows(rows: &[TableRow], config: &SortConfig) -> Vec<TableRow> {
    let Some(direction) = config.direction else {
        return rows.to_vec();
    };
    trace!(field = %config.field, ?direction, kind = ?config.kind, "sorting table rows");

    match config.kind {
        SortValueKind::Number => sort_by_key(rows, &config.field, direction, numeric_key),
        SortValueKind::Date => sort_by_key(rows, &config.field, direction, date_key),
        SortValueKind::String => sort_rows_with(rows, &config.field, direction, |a, b| {
            let (a, b) = (value_text(a), value_text(b));
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(&b))
        }),
    }
}

/// Sorts with a caller comparator written for ascending order; `Desc`
/// reverses it. Missing fields compare as `null`.
#[must_use]
pub fn sort_rows_with<F>(
    rows: &[TableRow],
    field: &str,
    direction: SortDirection,
    mut compare: F,
) -> Vec<TableRow>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.get(field).unwrap_or(&Value::Null);
        let b = b.get(field).unwrap_or(&Value::Null);
        direction.apply(compare(a, b))
    });
    sorted
}

fn sort_by_key<K: Ord>(
    rows: &[TableRow],
    field: &str,
    direction: SortDirection,
    key: fn(&Value) -> Option<K>,
) -> Vec<TableRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_cached_key(|row| SortKey {
        direction,
        value: row.get(field).and_then(key),
    });
    sorted
}

/// Present values ordered by direction, absent values always after them.
struct SortKey<K> {
    direction: SortDirection,
    value: Option<K>,
}

impl<K: Ord> Ord for SortKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => self.direction.apply(a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<K: Ord> PartialOrd for SortKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for SortKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for SortKey<K> {}

fn numeric_key(value: &Value) -> Option<OrderedFloat<f64>> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|number| !number.is_nan()).map(OrderedFloat)
}

/// Milliseconds since the Unix epoch.
fn date_key(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_f64().map(|millis| millis as i64),
        Value::String(text) => parse_date_millis(text.trim()),
        _ => None,
    }
}

fn parse_date_millis(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.and_utc().timestamp_millis());
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|datetime| datetime.and_utc().timestamp_millis());
        }
    }
    None
}
