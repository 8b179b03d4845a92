use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart info is missing")]
    MissingChartInfo,

    #[error("chart config is missing")]
    MissingChartConfig,

    #[error("chart config option is missing")]
    MissingOption,

    #[error("dataset source is empty or malformed: {0}")]
    InvalidDataset(String),

    #[error("values config is missing or malformed: {0}")]
    InvalidValues(String),

    #[error("yAxes config is missing or empty")]
    MissingYAxes,

    #[error("yAxes config has {count} entries, at most 2 are supported")]
    TooManyYAxes { count: usize },

    #[error("yAxes[{index}] config is invalid: {reason}")]
    InvalidAxisConfig { index: usize, reason: String },

    #[error("xAxis config is missing")]
    MissingXAxis,

    #[error("no indicator definition matches series `{series}` (indicator `{indicator}`)")]
    UnknownIndicator { series: String, indicator: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    /// Configuration errors are raised for malformed input and never recovered
    /// internally.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::InvalidData(_))
    }
}
