use serde_json::Value;
use smallvec::SmallVec;

use crate::core::{
    CategoryAxisConfig, Cell, ClassifiedSeries, IndicatorDefinition, ValueAxisConfig,
};
use crate::error::{ChartError, ChartResult};

use super::{AxisEntry, ChartInfo, ChartOptionConfig, DatasetSource};

/// Borrowed view of a [`ChartInfo`] whose required parts are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedChartInfo<'a> {
    pub chart_type: Option<&'a str>,
    pub option: &'a ChartOptionConfig,
    pub source: &'a [Vec<Cell>],
    pub indicators: &'a [IndicatorDefinition],
}

/// Checks the parts every build needs: `chartConfig`, its `option`, a
/// non-empty row list, and a `values` array.
pub fn validate_chart_info(info: &ChartInfo) -> ChartResult<ValidatedChartInfo<'_>> {
    let config = info
        .chart_config
        .as_ref()
        .ok_or(ChartError::MissingChartConfig)?;
    let option = config.option.as_ref().ok_or(ChartError::MissingOption)?;

    let source = match &info.dataset_source {
        Some(DatasetSource::Rows(rows)) if !rows.is_empty() => rows.as_slice(),
        Some(DatasetSource::Rows(_)) => {
            return Err(ChartError::InvalidDataset(
                "dataset source has no rows".to_owned(),
            ));
        }
        Some(DatasetSource::Malformed(value)) => {
            return Err(ChartError::InvalidDataset(format!(
                "expected a list of rows, got {}",
                json_kind(value)
            )));
        }
        None => {
            return Err(ChartError::InvalidDataset(
                "dataset source is missing".to_owned(),
            ));
        }
    };

    match &config.values {
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(ChartError::InvalidValues(format!(
                "expected an array, got {}",
                json_kind(other)
            )));
        }
        None => return Err(ChartError::InvalidValues("values are missing".to_owned())),
    }

    Ok(ValidatedChartInfo {
        chart_type: config.chart_type.as_deref(),
        option,
        source,
        indicators: &info.indicator_list,
    })
}

/// Resolves `yAxes` into at most two typed axis configs.
pub fn validate_y_axes(option: &ChartOptionConfig) -> ChartResult<SmallVec<[ValueAxisConfig; 2]>> {
    let entries = option
        .y_axes
        .as_ref()
        .map(|y_axes| y_axes.entries())
        .unwrap_or_default();
    if entries.is_empty() {
        return Err(ChartError::MissingYAxes);
    }
    if entries.len() > 2 {
        return Err(ChartError::TooManyYAxes {
            count: entries.len(),
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            AxisEntry::Config(config) => Ok(config.clone()),
            AxisEntry::Raw(value) => Err(ChartError::InvalidAxisConfig {
                index,
                reason: axis_entry_reason(value),
            }),
        })
        .collect()
}

/// Every classified series must target one of the configured value axes.
pub fn validate_series_axes(series: &[ClassifiedSeries], axis_count: usize) -> ChartResult<()> {
    let out_of_range = series.iter().find_map(|entry| {
        entry
            .axis_index
            .filter(|axis| axis.as_usize() >= axis_count)
            .map(|axis| (entry, axis))
    });
    match out_of_range {
        Some((entry, axis)) => Err(ChartError::InvalidAxisConfig {
            index: axis.as_usize(),
            reason: format!(
                "series `{}` targets value axis {axis} but only {axis_count} are configured",
                entry.name()
            ),
        }),
        None => Ok(()),
    }
}

pub fn validate_x_axis(option: &ChartOptionConfig) -> ChartResult<&CategoryAxisConfig> {
    option.x_axis.as_ref().ok_or(ChartError::MissingXAxis)
}

fn axis_entry_reason(value: &Value) -> String {
    if !value.is_object() {
        return format!("expected an object, got {}", json_kind(value));
    }
    match serde_json::from_value::<ValueAxisConfig>(value.clone()) {
        Err(err) => err.to_string(),
        Ok(_) => "axis object could not be read".to_owned(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
