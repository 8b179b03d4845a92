use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::{ChartInfo, ChartOptionBuilder, ChartOutput};

impl ChartInfo {
    /// Parses a chart payload. A `null` payload is a missing chart info.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart info json: {e}")))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        if value.is_null() {
            return Err(ChartError::MissingChartInfo);
        }
        serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("failed to read chart info: {e}")))
    }
}

impl ChartOutput {
    pub fn to_json_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart option: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart option: {e}"))
        })
    }
}

impl ChartOptionBuilder {
    /// JSON in, JSON out; the shape consumed by a JavaScript charting host.
    pub fn build_json(&self, input: &str, disabled_legend: bool) -> ChartResult<Value> {
        let info = ChartInfo::from_json_str(input)?;
        self.build(&info, disabled_legend)?.to_json_value()
    }
}
