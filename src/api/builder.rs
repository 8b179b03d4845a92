use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisSlot, LegendOption, LegendPlacement, SeriesStyle, build_category_axis,
    build_legend_entries, build_value_axes, classify_rows, normalize_dataset, transform_series,
};
use crate::error::ChartResult;

use super::{
    ChartInfo, ChartOption, ChartOptionConfig, ChartOutput, ChartTheme, DataZoomOption,
    LEGEND_GRID_TOP, TooltipOption, validate_chart_info, validate_series_axes, validate_x_axis,
    validate_y_axes,
};

/// Per-builder switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Fail with `UnknownIndicator` instead of drawing unmatched series untyped.
    #[serde(default)]
    pub strict_indicators: bool,
}

impl BuildOptions {
    #[must_use]
    pub fn with_strict_indicators(mut self, strict: bool) -> Self {
        self.strict_indicators = strict;
        self
    }
}

/// Turns a [`ChartInfo`] into a bar/line [`ChartOutput`].
///
/// The builder holds only immutable configuration. Every call rebuilds the
/// whole option from its input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOptionBuilder {
    theme: ChartTheme,
    options: BuildOptions,
}

impl ChartOptionBuilder {
    #[must_use]
    pub fn new(theme: ChartTheme) -> Self {
        Self {
            theme,
            options: BuildOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    /// Builds the chart option.
    ///
    /// `disabled_legend` is set while the trend-line overlay owns the chart;
    /// it hides the legend and frees the grid space reserved for it.
    pub fn build(&self, info: &ChartInfo, disabled_legend: bool) -> ChartResult<ChartOutput> {
        let validated = validate_chart_info(info)?;
        let dataset = normalize_dataset(validated.source)?;
        if dataset.is_empty() {
            debug!(
                dropped_sentinel_rows = dataset.dropped_sentinel_rows,
                "dataset has no drawable rows; returning empty option"
            );
            return Ok(ChartOutput::Empty);
        }

        let option = validated.option;
        let y_axes = validate_y_axes(option)?;
        let x_axis_config = validate_x_axis(option)?;

        let series = classify_rows(
            dataset.rows,
            validated.indicators,
            self.options.strict_indicators,
        )?;
        validate_series_axes(&series, y_axes.len())?;

        let category_axis = build_category_axis(&dataset.categories, x_axis_config);
        let value_axes = build_value_axes(&y_axes);
        let (x_axis, y_axis) = if option.value_orient.is_horizontal() {
            (
                AxisSlot::Multiple(value_axes),
                AxisSlot::Single(Box::new(category_axis)),
            )
        } else {
            (
                AxisSlot::Single(Box::new(category_axis)),
                AxisSlot::Multiple(value_axes),
            )
        };

        let legend = LegendOption::new(
            build_legend_entries(&series),
            legend_placement(option),
            disabled_legend,
        );

        let axis_series_types: Vec<Option<String>> = y_axes
            .iter()
            .map(|config| config.series_type.clone())
            .collect();
        let series = transform_series(
            &series,
            &series_style(option),
            &axis_series_types,
            validated.chart_type,
        );

        let mut grid = self.theme.grid.clone();
        if !disabled_legend {
            grid.top = Some(LEGEND_GRID_TOP.to_owned());
        }

        debug!(
            series = series.len(),
            categories = dataset.categories.len(),
            value_axes = y_axes.len(),
            orientation = ?option.value_orient,
            disabled_legend,
            "built bar/line chart option"
        );

        Ok(ChartOutput::Ready(Box::new(ChartOption {
            color: self.theme.palette.clone(),
            grid,
            data_zoom: vec![DataZoomOption::default()],
            tooltip: TooltipOption::default(),
            x_axis,
            y_axis,
            legend,
            series,
        })))
    }
}

/// Builds with the default theme and lenient indicator matching.
pub fn build_bar_or_line_option(info: &ChartInfo, disabled_legend: bool) -> ChartResult<ChartOutput> {
    ChartOptionBuilder::default().build(info, disabled_legend)
}

fn series_style(option: &ChartOptionConfig) -> SeriesStyle {
    SeriesStyle {
        orientation: option.value_orient,
        smooth: option.smooth,
        data_area: option.data_area,
        diaphaneity: option.diaphaneity,
        shadow_color: option.shadow_color.clone(),
        shadow_blur: option.shadow_blur,
    }
}

fn legend_placement(option: &ChartOptionConfig) -> LegendPlacement {
    LegendPlacement {
        orient: option.legend_orient.clone(),
        left: option.legend_x.clone(),
    }
}
