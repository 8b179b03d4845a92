use rust_decimal::prelude::{Decimal, FromPrimitive, RoundingStrategy, ToPrimitive};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::indicator::ClassifiedSeries;
use crate::core::types::{AxisIndex, Orientation, SeriesValue};

/// Bars never grow wider than this, whatever the category count.
pub const BAR_MAX_WIDTH: u32 = 20;

const FALLBACK_SERIES_TYPE: &str = "line";
const PERCENT_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesTransform {
    Plain,
    Stack,
    Percent,
}

/// Parsed series kind: base chart type plus stacking transform.
///
/// `"STACKBAR"` is a stacked `bar`, `"PercentBar"` a percent-stacked `bar`.
/// When both markers appear the percent transform wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesKind {
    pub base: String,
    pub transform: SeriesTransform,
}

impl SeriesKind {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let transform = if lowered.contains("percent") {
            SeriesTransform::Percent
        } else if lowered.contains("stack") {
            SeriesTransform::Stack
        } else {
            SeriesTransform::Plain
        };
        let base = lowered.replace("percent", "").replace("stack", "");
        Self { base, transform }
    }

    #[must_use]
    pub fn is_bar(&self) -> bool {
        self.base == "bar"
    }
}

/// Styling knobs shared by every series of a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub orientation: Orientation,
    pub smooth: bool,
    pub data_area: bool,
    pub diaphaneity: Option<f64>,
    pub shadow_color: Option<String>,
    pub shadow_blur: Option<f64>,
}

impl SeriesStyle {
    /// `diaphaneity` is a 0..=100 percentage; unset or zero means opaque.
    #[must_use]
    pub fn area_opacity(&self) -> f64 {
        match self.diaphaneity {
            Some(diaphaneity) if diaphaneity != 0.0 && !diaphaneity.is_nan() => diaphaneity / 100.0,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    pub opacity: f64,
}

/// One renderable series in the charting library's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(rename = "type")]
    pub series_type: String,
    pub series_layout_by: String,
    pub smooth: bool,
    pub name: String,
    pub data: Vec<SeriesValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_max_width: Option<u32>,
    #[serde(skip)]
    pub axis_index: Option<AxisIndex>,
}

/// Per axis, per column totals used by the percent transform.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSums {
    primary: Vec<f64>,
    secondary: Vec<f64>,
}

impl ColumnSums {
    /// Sums every classified series on the same axis column by column.
    /// Missing points contribute nothing.
    #[must_use]
    pub fn from_series(series: &[ClassifiedSeries]) -> Self {
        let mut sums = Self::default();
        for entry in series {
            let Some(axis_index) = entry.axis_index else {
                continue;
            };
            let totals = sums.totals_mut(axis_index);
            if totals.len() < entry.values.len() {
                totals.resize(entry.values.len(), 0.0);
            }
            for (total, value) in totals.iter_mut().zip(&entry.values) {
                if let Some(value) = value.as_f64() {
                    *total += value;
                }
            }
        }
        sums
    }

    #[must_use]
    pub fn get(&self, axis_index: AxisIndex, column: usize) -> f64 {
        let totals = match axis_index {
            AxisIndex::Primary => &self.primary,
            AxisIndex::Secondary => &self.secondary,
        };
        totals.get(column).copied().unwrap_or(0.0)
    }

    fn totals_mut(&mut self, axis_index: AxisIndex) -> &mut Vec<f64> {
        match axis_index {
            AxisIndex::Primary => &mut self.primary,
            AxisIndex::Secondary => &mut self.secondary,
        }
    }
}

/// `value / column_sum * 100`, rounded half away from zero to 2 decimals.
/// A zero column sum yields `NaN`.
#[must_use]
pub fn percent_of(value: f64, column_sum: f64) -> f64 {
    if column_sum == 0.0 {
        return f64::NAN;
    }
    let ratio = value / column_sum * 100.0;
    Decimal::from_f64(ratio)
        .map(|decimal| {
            decimal.round_dp_with_strategy(PERCENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        })
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(ratio)
}

/// Picks the series kind: indicator setting, then its axis setting, then the
/// chart-wide type.
#[must_use]
pub fn resolve_series_kind(
    series: &ClassifiedSeries,
    axis_series_types: &[Option<String>],
    chart_type: Option<&str>,
) -> SeriesKind {
    let axis_type = series
        .axis_index
        .and_then(|axis| axis_series_types.get(axis.as_usize()))
        .and_then(Option::as_deref);

    let raw = series
        .series_kind
        .as_deref()
        .or(axis_type)
        .or(chart_type)
        .filter(|kind| !kind.is_empty())
        .unwrap_or(FALLBACK_SERIES_TYPE);
    let mut kind = SeriesKind::parse(raw);
    if kind.base.is_empty() {
        // Marker-only kinds such as "STACK" keep their transform.
        kind.base = chart_type
            .map(|chart_type| SeriesKind::parse(chart_type).base)
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| FALLBACK_SERIES_TYPE.to_owned());
    }
    kind
}

/// Converts classified rows into renderable series.
#[must_use]
pub fn transform_series(
    series: &[ClassifiedSeries],
    style: &SeriesStyle,
    axis_series_types: &[Option<String>],
    chart_type: Option<&str>,
) -> Vec<SeriesOption> {
    let sums = ColumnSums::from_series(series);
    let horizontal = style.orientation.is_horizontal();

    series
        .iter()
        .map(|entry| {
            let kind = resolve_series_kind(entry, axis_series_types, chart_type);
            let axis_index = entry.axis_index;
            let axis_position = axis_index.map(u8::from);

            let (data, stack) = match (kind.transform, axis_index) {
                (SeriesTransform::Percent, Some(axis)) => {
                    let data = entry
                        .values
                        .iter()
                        .enumerate()
                        .map(|(column, value)| match value.as_f64() {
                            Some(value) => SeriesValue::Number(percent_of(value, sums.get(axis, column))),
                            None => SeriesValue::Missing,
                        })
                        .collect();
                    (data, Some(axis.to_string()))
                }
                (SeriesTransform::Stack, Some(axis)) => (entry.values.clone(), Some(axis.to_string())),
                _ => (entry.values.clone(), None),
            };

            let area_style = style.data_area.then(|| AreaStyle {
                shadow_color: style.shadow_color.clone(),
                shadow_blur: style.shadow_blur,
                opacity: style.area_opacity(),
            });

            SeriesOption {
                bar_max_width: kind.is_bar().then_some(BAR_MAX_WIDTH),
                series_type: kind.base,
                series_layout_by: "row".to_owned(),
                smooth: style.smooth,
                name: entry.name().to_owned(),
                data,
                y_axis_index: if horizontal { None } else { axis_position },
                x_axis_index: if horizontal { axis_position } else { None },
                area_style,
                stack,
                axis_index,
            }
        })
        .inspect(|option| {
            debug!(
                series = %option.name,
                series_type = %option.series_type,
                stack = ?option.stack,
                "transformed series"
            );
        })
        .collect()
}
