use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::number_format::{format_abbreviated, wrap_category_label};
use crate::core::types::AxisIndex;

/// `{auto, value}` bound of a value axis. Only non-auto bounds with a value
/// are forwarded to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBound {
    #[serde(default)]
    pub auto: bool,
    #[serde(default)]
    pub value: Option<f64>,
}

impl AxisBound {
    #[must_use]
    pub fn auto() -> Self {
        Self {
            auto: true,
            value: None,
        }
    }

    #[must_use]
    pub fn fixed(value: f64) -> Self {
        Self {
            auto: false,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn resolved(self) -> Option<f64> {
        if self.auto { None } else { self.value }
    }
}

/// Per value-axis settings from `chartConfig.option.yAxes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisConfig {
    #[serde(default)]
    pub min: Option<AxisBound>,
    #[serde(default)]
    pub max: Option<AxisBound>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub show_axis: bool,
    #[serde(default = "default_true")]
    pub show_label: bool,
    #[serde(default, rename = "showSpiltLine", alias = "showSplitLine")]
    pub show_split_line: bool,
    #[serde(default)]
    pub series_type: Option<String>,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            name: None,
            show_axis: false,
            show_label: true,
            show_split_line: false,
            series_type: None,
        }
    }
}

/// Category axis settings from `chartConfig.option.xAxis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisConfig {
    #[serde(default = "default_true")]
    pub show_axis: bool,
    #[serde(default = "default_true")]
    pub show_label: bool,
    #[serde(default)]
    pub ctg_label_interval: Option<u32>,
    #[serde(default)]
    pub ctg_label_rotate: Option<f64>,
}

impl Default for CategoryAxisConfig {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_label: true,
            ctg_label_interval: None,
            ctg_label_rotate: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

/// Label formatter attached to an axis.
///
/// Formatters are callbacks on the rendering side, so they are not part of
/// the serialized option. Hosts apply them through [`AxisLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormatter {
    Abbreviate,
    WrapCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelInterval {
    Auto,
    Every(u32),
}

impl LabelInterval {
    /// `0` and unset both mean automatic.
    #[must_use]
    pub fn from_config(interval: Option<u32>) -> Self {
        match interval {
            Some(every) if every > 0 => Self::Every(every),
            _ => Self::Auto,
        }
    }
}

impl Serialize for LabelInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Every(every) => serializer.serialize_u32(*every),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<LabelInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip)]
    pub formatter: LabelFormatter,
}

impl AxisLabel {
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match self.formatter {
            LabelFormatter::Abbreviate => format_abbreviated(value),
            LabelFormatter::WrapCategory => wrap_category_label(&value.to_string()),
        }
    }

    #[must_use]
    pub fn format_category(&self, label: &str) -> String {
        match self.formatter {
            LabelFormatter::WrapCategory => wrap_category_label(label),
            LabelFormatter::Abbreviate => label
                .trim()
                .parse::<f64>()
                .map_or_else(|_| label.to_owned(), format_abbreviated),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    #[serde(rename = "type")]
    pub line_type: LineType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    pub line_style: LineStyle,
}

impl SplitLine {
    fn dashed(show: bool) -> Self {
        Self {
            show,
            line_style: LineStyle {
                line_type: LineType::Dashed,
            },
        }
    }
}

/// One fully built axis in the charting library's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub axis_line: AxisLine,
    pub axis_label: AxisLabel,
    pub split_line: SplitLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
}

pub type ValueAxes = SmallVec<[AxisOption; 2]>;

/// Either the single category axis or the list of value axes.
///
/// Orientation decides which of the two lands in `xAxis` and `yAxis`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisSlot {
    Single(Box<AxisOption>),
    Multiple(ValueAxes),
}

impl AxisSlot {
    #[must_use]
    pub fn axes(&self) -> &[AxisOption] {
        match self {
            Self::Single(axis) => std::slice::from_ref(axis.as_ref()),
            Self::Multiple(axes) => axes.as_slice(),
        }
    }

    #[must_use]
    pub fn category_axis(&self) -> Option<&AxisOption> {
        self.axes()
            .iter()
            .find(|axis| axis.kind == AxisKind::Category)
    }
}

/// Builds one value axis.
///
/// Only the primary axis may draw split lines; the secondary axis never grids.
#[must_use]
pub fn build_value_axis(config: &ValueAxisConfig, index: AxisIndex) -> AxisOption {
    let show_split_line = index == AxisIndex::Primary && config.show_split_line;
    trace!(axis = %index, show_split_line, "building value axis");

    AxisOption {
        kind: AxisKind::Value,
        data: None,
        name: config.name.clone().filter(|name| !name.is_empty()),
        axis_line: AxisLine {
            show: config.show_axis,
        },
        axis_label: AxisLabel {
            show: config.show_label,
            interval: None,
            rotate: None,
            formatter: LabelFormatter::Abbreviate,
        },
        split_line: SplitLine::dashed(show_split_line),
        min: config.min.and_then(AxisBound::resolved),
        max: config.max.and_then(AxisBound::resolved),
        scale: Some(true),
    }
}

/// Builds the value axes in configuration order. Callers guarantee at most two.
#[must_use]
pub fn build_value_axes(configs: &[ValueAxisConfig]) -> ValueAxes {
    configs
        .iter()
        .zip([AxisIndex::Primary, AxisIndex::Secondary])
        .map(|(config, index)| build_value_axis(config, index))
        .collect()
}

/// Builds the category axis from the header-less category labels.
#[must_use]
pub fn build_category_axis(categories: &[String], config: &CategoryAxisConfig) -> AxisOption {
    AxisOption {
        kind: AxisKind::Category,
        data: Some(categories.to_vec()),
        name: None,
        axis_line: AxisLine {
            show: config.show_axis,
        },
        axis_label: AxisLabel {
            show: config.show_label,
            interval: Some(LabelInterval::from_config(config.ctg_label_interval)),
            rotate: config.ctg_label_rotate,
            formatter: LabelFormatter::WrapCategory,
        },
        split_line: SplitLine::dashed(false),
        min: None,
        max: None,
        scale: None,
    }
}
