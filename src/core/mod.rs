pub mod axis;
pub mod dataset;
pub mod indicator;
pub mod legend;
pub mod number_format;
pub mod series;
pub mod types;

pub use axis::{
    AxisBound, AxisKind, AxisLabel, AxisOption, AxisSlot, CategoryAxisConfig, LabelFormatter,
    LabelInterval, ValueAxes, ValueAxisConfig, build_category_axis, build_value_axes,
    build_value_axis,
};
pub use dataset::{DatasetRow, NormalizedDataset, SeriesKey, normalize_dataset};
pub use indicator::{ClassifiedSeries, IndicatorDefinition, classify_rows};
pub use legend::{
    LegendEntry, LegendIcon, LegendOption, LegendPlacement, build_legend_entries,
    is_drawable_legend_name,
};
pub use number_format::{VALUE_PLACEHOLDER, format_abbreviated, wrap_category_label};
pub use series::{
    BAR_MAX_WIDTH, ColumnSums, SeriesKind, SeriesOption, SeriesStyle, SeriesTransform,
    percent_of, transform_series,
};
pub use types::{AxisIndex, Cell, Orientation, SENTINEL, SeriesValue};
