mod builder;
mod chart_info;
mod chart_option_state;
mod json_contract;
mod option;
mod theme;
mod validation;

pub use builder::{BuildOptions, ChartOptionBuilder, build_bar_or_line_option};
pub use chart_info::{
    AxisEntry, ChartConfig, ChartInfo, ChartOptionConfig, DatasetSource, YAxesConfig,
};
pub use chart_option_state::{ChartOptionRequest, LegendViewItem, legend_view_items};
pub use option::{
    ChartOption, ChartOutput, DataZoomKind, DataZoomOption, FilterMode, TooltipOption,
    TooltipTrigger,
};
pub use theme::{ChartTheme, GridOption, LEGEND_GRID_TOP};
pub use validation::{
    ValidatedChartInfo, validate_chart_info, validate_series_axes, validate_x_axis,
    validate_y_axes,
};
