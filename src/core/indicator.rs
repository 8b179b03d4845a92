use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::dataset::{DatasetRow, SeriesKey};
use crate::core::types::{AxisIndex, SeriesValue};
use crate::error::{ChartError, ChartResult};

/// Rendering metadata configured for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorDefinition {
    pub name: String,
    #[serde(default, rename = "index", alias = "axisIndex")]
    pub axis_index: AxisIndex,
    #[serde(default, alias = "series_type")]
    pub series_type: Option<String>,
    #[serde(default)]
    pub formatter: Option<String>,
}

impl IndicatorDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, axis_index: AxisIndex) -> Self {
        Self {
            name: name.into(),
            axis_index,
            series_type: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_series_type(mut self, series_type: impl Into<String>) -> Self {
        self.series_type = Some(series_type.into());
        self
    }
}

/// A dataset row paired with the indicator definition its name resolved to.
///
/// `axis_index` is `None` when no definition matched; such series are drawn
/// with the chart default type and never stacked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSeries {
    pub key: SeriesKey,
    pub values: Vec<SeriesValue>,
    pub axis_index: Option<AxisIndex>,
    pub series_kind: Option<String>,
    pub formatter: Option<String>,
}

impl ClassifiedSeries {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.key.compound
    }

    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.axis_index.is_some()
    }
}

/// Resolves every row against `indicators` by its leaf indicator name.
///
/// With `strict` unset, rows without a matching definition degrade to an
/// unclassified series. With `strict` set they fail the build.
pub fn classify_rows(
    rows: Vec<DatasetRow>,
    indicators: &[IndicatorDefinition],
    strict: bool,
) -> ChartResult<Vec<ClassifiedSeries>> {
    rows.into_iter()
        .map(|row| {
            let definition = indicators
                .iter()
                .find(|definition| definition.name == row.key.indicator);

            match definition {
                Some(definition) => Ok(ClassifiedSeries {
                    axis_index: Some(definition.axis_index),
                    series_kind: definition.series_type.clone(),
                    formatter: definition.formatter.clone(),
                    key: row.key,
                    values: row.values,
                }),
                None if strict => Err(ChartError::UnknownIndicator {
                    series: row.key.compound,
                    indicator: row.key.indicator,
                }),
                None => {
                    warn!(
                        series = %row.key.compound,
                        indicator = %row.key.indicator,
                        "no indicator definition matches series; drawing it untyped"
                    );
                    Ok(ClassifiedSeries {
                        key: row.key,
                        values: row.values,
                        axis_index: None,
                        series_kind: None,
                        formatter: None,
                    })
                }
            }
        })
        .collect()
}
