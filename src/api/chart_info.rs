use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::{
    AxisBound, CategoryAxisConfig, Cell, IndicatorDefinition, Orientation, ValueAxisConfig,
};

/// Input bundle produced by the data-fetch layer.
///
/// Fields are kept loose where the upstream payload is loose; everything is
/// checked once by [`validate_chart_info`](super::validate_chart_info) before
/// the pipeline runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfo {
    #[serde(default)]
    pub chart_config: Option<ChartConfig>,
    #[serde(default)]
    pub dataset_source: Option<DatasetSource>,
    #[serde(default)]
    pub indicator_list: Vec<IndicatorDefinition>,
}

impl ChartInfo {
    #[must_use]
    pub fn new(chart_config: ChartConfig, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            chart_config: Some(chart_config),
            dataset_source: Some(DatasetSource::Rows(rows)),
            indicator_list: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_indicators(mut self, indicators: Vec<IndicatorDefinition>) -> Self {
        self.indicator_list = indicators;
        self
    }
}

/// `datasetSource` as received. Anything that is not a list of rows is kept
/// verbatim so validation can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetSource {
    Rows(Vec<Vec<Cell>>),
    Malformed(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Chart-wide series type used when neither the indicator nor its axis
    /// names one.
    #[serde(default, rename = "type")]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub option: Option<ChartOptionConfig>,
    #[serde(default)]
    pub values: Option<Value>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: impl Into<String>, option: ChartOptionConfig) -> Self {
        Self {
            chart_type: Some(chart_type.into()),
            option: Some(option),
            values: Some(Value::Array(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: Value) -> Self {
        self.values = Some(values);
        self
    }
}

/// `yAxes` may be a single axis object or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YAxesConfig {
    Many(Vec<AxisEntry>),
    One(AxisEntry),
}

impl YAxesConfig {
    #[must_use]
    pub fn from_configs(configs: Vec<ValueAxisConfig>) -> Self {
        Self::Many(configs.into_iter().map(AxisEntry::Config).collect())
    }

    /// Broadcasts a single axis to a one-element list.
    #[must_use]
    pub fn entries(&self) -> &[AxisEntry] {
        match self {
            Self::Many(entries) => entries,
            Self::One(entry) => std::slice::from_ref(entry),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisEntry {
    Config(ValueAxisConfig),
    /// Entry that did not parse as an axis object; rejected by validation.
    Raw(Value),
}

/// `chartConfig.option` as configured in the dashboard editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptionConfig {
    #[serde(default, deserialize_with = "lenient_orientation")]
    pub value_orient: Orientation,
    #[serde(default)]
    pub y_axes: Option<YAxesConfig>,
    #[serde(default)]
    pub x_axis: Option<CategoryAxisConfig>,
    #[serde(default)]
    pub smooth: bool,
    #[serde(default)]
    pub data_area: bool,
    #[serde(default, deserialize_with = "lenient_number")]
    pub diaphaneity: Option<f64>,
    #[serde(default)]
    pub shadow_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shadow_blur: Option<f64>,
    #[serde(default)]
    pub legend_orient: Option<String>,
    #[serde(default, rename = "legendX")]
    pub legend_x: Option<String>,
    #[serde(default)]
    pub show_trend_line: bool,
}

impl Default for ChartOptionConfig {
    /// Editor defaults for a fresh bar/line card: stacked bars on the primary
    /// axis starting at zero, hidden secondary axis.
    fn default() -> Self {
        let y_axes = vec![
            ValueAxisConfig {
                min: Some(AxisBound::fixed(0.0)),
                max: Some(AxisBound::auto()),
                name: Some(String::new()),
                show_axis: true,
                show_label: true,
                show_split_line: true,
                series_type: Some("STACKBAR".to_owned()),
            },
            ValueAxisConfig {
                min: Some(AxisBound::auto()),
                max: Some(AxisBound::auto()),
                name: Some(String::new()),
                show_axis: false,
                show_label: false,
                show_split_line: false,
                series_type: None,
            },
        ];
        Self {
            value_orient: Orientation::Vertical,
            y_axes: Some(YAxesConfig::from_configs(y_axes)),
            x_axis: Some(CategoryAxisConfig::default()),
            smooth: true,
            data_area: false,
            diaphaneity: Some(50.0),
            shadow_color: Some("#A9B6E0".to_owned()),
            shadow_blur: None,
            legend_orient: Some("horizontal".to_owned()),
            legend_x: Some("left".to_owned()),
            show_trend_line: false,
        }
    }
}

impl ChartOptionConfig {
    #[must_use]
    pub fn with_y_axes(mut self, configs: Vec<ValueAxisConfig>) -> Self {
        self.y_axes = Some(YAxesConfig::from_configs(configs));
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.value_orient = orientation;
        self
    }
}

/// Only `"horizontal"` flips the chart; any other value, `null` included, is
/// vertical.
fn lenient_orientation<'de, D>(deserializer: D) -> Result<Orientation, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value.as_ref().and_then(Value::as_str) {
        Some("horizontal") => Orientation::Horizontal,
        _ => Orientation::Vertical,
    })
}

/// Accepts numbers, numeric strings, `""` and `null`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(cell.and_then(|cell| cell.as_value().as_f64()))
}
