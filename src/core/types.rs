use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ChartError;

/// Marker used by the data source for an intentionally absent row or value.
pub const SENTINEL: &str = "-";

/// Raw dataset cell as delivered by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Label form used for category names and series names.
    #[must_use]
    pub fn as_label(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Empty => String::new(),
        }
    }

    /// Numeric form; `"-"`, empty and non-numeric text are missing.
    #[must_use]
    pub fn as_value(&self) -> SeriesValue {
        match self {
            Self::Number(value) => SeriesValue::Number(*value),
            Self::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => SeriesValue::Number(value),
                Err(_) => SeriesValue::Missing,
            },
            Self::Empty => SeriesValue::Missing,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One data point of a rendered series.
///
/// Serializes as a plain number, `"-"` for a missing point, and `"NaN"` for a
/// non-finite number.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "Cell")]
pub enum SeriesValue {
    Number(f64),
    Missing,
}

impl SeriesValue {
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Self::Number(value) if value.is_nan())
    }
}

impl From<Cell> for SeriesValue {
    fn from(cell: Cell) -> Self {
        cell.as_value()
    }
}

impl Serialize for SeriesValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            Self::Number(value) if value.is_nan() => serializer.serialize_str("NaN"),
            Self::Number(value) if *value > 0.0 => serializer.serialize_str("Infinity"),
            Self::Number(_) => serializer.serialize_str("-Infinity"),
            Self::Missing => serializer.serialize_str(SENTINEL),
        }
    }
}

/// Value axis selector. Charts carry at most two value axes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum AxisIndex {
    #[default]
    Primary,
    Secondary,
}

impl AxisIndex {
    #[must_use]
    pub fn as_usize(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }

    pub fn from_position(position: usize) -> Result<Self, ChartError> {
        match position {
            0 => Ok(Self::Primary),
            1 => Ok(Self::Secondary),
            _ => Err(ChartError::TooManyYAxes {
                count: position + 1,
            }),
        }
    }
}

impl TryFrom<u8> for AxisIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Primary),
            1 => Ok(Self::Secondary),
            other => Err(format!("axis index must be 0 or 1, got {other}")),
        }
    }
}

impl From<AxisIndex> for u8 {
    fn from(value: AxisIndex) -> Self {
        match value {
            AxisIndex::Primary => 0,
            AxisIndex::Secondary => 1,
        }
    }
}

impl fmt::Display for AxisIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Direction the value axes run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}
