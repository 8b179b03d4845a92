use serde::{Deserialize, Serialize};

/// Grid reserved for the legend strip when the legend is shown.
pub const LEGEND_GRID_TOP: &str = "36px";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub contain_label: bool,
}

impl Default for GridOption {
    fn default() -> Self {
        Self {
            top: None,
            left: "8px".to_owned(),
            right: "8px".to_owned(),
            bottom: "28px".to_owned(),
            contain_label: true,
        }
    }
}

/// Base options merged into every built chart.
///
/// A theme is an immutable value owned by the caller; each build clones what
/// it needs into its own output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub palette: Vec<String>,
    pub grid: GridOption,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: [
                "#5B8FF9", "#5AD8A6", "#5D7092", "#F6BD16", "#E8684A", "#6DC8EC", "#9270CA",
                "#FF9D4D", "#269A99", "#FF99C3",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            grid: GridOption::default(),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOption) -> Self {
        self.grid = grid;
        self
    }

    /// Palette color for the `index`-th series, cycling through the palette.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette
            .get(index % self.palette.len())
            .map(String::as_str)
    }
}
