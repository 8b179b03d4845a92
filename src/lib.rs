//! trendview: bar/line chart options and sticky-table state for trend dashboards.
//!
//! The core turns a tabular dataset plus its editor configuration into a
//! chart option in the ECharts schema. Table and interaction helpers cover
//! the state a dashboard card keeps around the chart.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod table;
pub mod telemetry;

pub use api::{ChartInfo, ChartOptionBuilder, ChartOutput, build_bar_or_line_option};
pub use error::{ChartError, ChartResult};
