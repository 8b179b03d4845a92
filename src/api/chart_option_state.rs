use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::LegendEntry;

use super::{ChartInfo, ChartOptionBuilder, ChartOutput, ChartTheme};

/// Render-time state of a chart card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartOptionRequest {
    /// Data is still loading.
    pub pending: bool,
    /// The fetch failed upstream.
    pub error: bool,
    /// Sorted view with the trend-line overlay; the chart legend is disabled.
    pub use_sort: bool,
}

impl ChartOptionBuilder {
    /// Resolves the option a chart card should render.
    ///
    /// Returns `None` while pending, after an upstream error, when no chart
    /// config exists, or when the build fails. Build failures are logged, not
    /// returned; the card shows its error state instead.
    pub fn resolve<S: AsRef<str>>(
        &self,
        info: &ChartInfo,
        request: ChartOptionRequest,
        disabled_legend_items: &[S],
    ) -> Option<ChartOutput> {
        if request.pending || request.error || info.chart_config.is_none() {
            return None;
        }

        let mut output = match self.build(info, request.use_sort) {
            Ok(output) => output,
            Err(err) => {
                error!(error = %err, "chart option build failed");
                return None;
            }
        };

        if let Some(option) = output.option_mut() {
            option.legend.apply_disabled(disabled_legend_items);
        }
        Some(output)
    }
}

/// Display data for one item of the custom legend strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendViewItem {
    pub name: String,
    pub color: Option<String>,
    pub disabled: bool,
}

/// Pairs each legend entry with its series color.
///
/// Colors are assigned by position before `"-"` and empty names are dropped,
/// so remaining items keep the color of their series.
#[must_use]
pub fn legend_view_items<S: AsRef<str>>(
    entries: &[LegendEntry],
    theme: &ChartTheme,
    disabled_items: &[S],
) -> Vec<LegendViewItem> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LegendViewItem {
            name: entry.name.clone(),
            color: theme.color_at(index).map(str::to_owned),
            disabled: disabled_items
                .iter()
                .any(|name| name.as_ref() == entry.name),
        })
        .filter(|item| crate::core::is_drawable_legend_name(&item.name))
        .collect()
}
