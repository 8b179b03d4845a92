use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::{AxisSlot, LegendOption, SeriesOption};

use super::GridOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataZoomKind {
    Inside,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    Filter,
    WeakFilter,
    Empty,
    None,
}

/// Touch/wheel zoom window over the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoomOption {
    #[serde(rename = "type")]
    pub kind: DataZoomKind,
    pub throttle: u32,
    pub min_value_span: u32,
    pub start: f64,
    pub end: f64,
    pub zoom_lock: bool,
    pub zoom_sensitivity: f64,
    pub move_threshold: u32,
    pub prevent_default_mouse_move: bool,
    pub filter_mode: FilterMode,
}

impl Default for DataZoomOption {
    /// Shows the trailing 30% of the range; zooming is locked, panning is not.
    fn default() -> Self {
        Self {
            kind: DataZoomKind::Inside,
            throttle: 200,
            min_value_span: 6,
            start: 70.0,
            end: 100.0,
            zoom_lock: true,
            zoom_sensitivity: 0.3,
            move_threshold: 5,
            prevent_default_mouse_move: false,
            filter_mode: FilterMode::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

/// Tooltip content is drawn by the host popover, so the chart only tracks the
/// axis pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOption {
    pub trigger: TooltipTrigger,
    pub show_content: bool,
}

impl Default for TooltipOption {
    fn default() -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            show_content: false,
        }
    }
}

/// Complete bar/line chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub color: Vec<String>,
    pub grid: GridOption,
    pub data_zoom: Vec<DataZoomOption>,
    pub tooltip: TooltipOption,
    pub x_axis: AxisSlot,
    pub y_axis: AxisSlot,
    pub legend: LegendOption,
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    /// Number of categories on the category axis, wherever orientation put it.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.x_axis
            .category_axis()
            .or_else(|| self.y_axis.category_axis())
            .and_then(|axis| axis.data.as_ref())
            .map_or(0, Vec::len)
    }
}

/// Result of a build.
///
/// `Empty` means there is nothing to render and serializes as `{}`. It is
/// distinct from a configuration error.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Empty,
    Ready(Box<ChartOption>),
}

impl ChartOutput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn option(&self) -> Option<&ChartOption> {
        match self {
            Self::Empty => None,
            Self::Ready(option) => Some(option),
        }
    }

    #[must_use]
    pub fn option_mut(&mut self) -> Option<&mut ChartOption> {
        match self {
            Self::Empty => None,
            Self::Ready(option) => Some(option),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<ChartOption> {
        match self {
            Self::Empty => None,
            Self::Ready(option) => Some(*option),
        }
    }
}

impl Serialize for ChartOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_map(Some(0))?.end(),
            Self::Ready(option) => option.serialize(serializer),
        }
    }
}
