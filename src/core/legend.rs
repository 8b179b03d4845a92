use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::indicator::ClassifiedSeries;
use crate::core::types::{AxisIndex, SENTINEL};

/// Legend marker shape; the only visual cue for axis membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendIcon {
    Circle,
    Rect,
}

impl LegendIcon {
    #[must_use]
    pub fn for_axis(axis_index: Option<AxisIndex>) -> Self {
        match axis_index {
            Some(AxisIndex::Primary) => Self::Circle,
            _ => Self::Rect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub icon: LegendIcon,
}

#[must_use]
pub fn is_drawable_legend_name(name: &str) -> bool {
    !name.is_empty() && name != SENTINEL
}

/// One entry per drawn series, in series order.
#[must_use]
pub fn build_legend_entries(series: &[ClassifiedSeries]) -> Vec<LegendEntry> {
    series
        .iter()
        .filter(|entry| is_drawable_legend_name(entry.name()))
        .map(|entry| LegendEntry {
            name: entry.name().to_owned(),
            icon: LegendIcon::for_axis(entry.axis_index),
        })
        .collect()
}

/// Legend placement read from `legendOrient` / `legendX`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub orient: Option<String>,
    pub left: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendTextStyle {
    pub padding: [i32; 4],
    pub font_size: u32,
    pub color: String,
}

impl Default for LegendTextStyle {
    fn default() -> Self {
        Self {
            padding: [0, 0, 0, -4],
            font_size: 10,
            color: "#666".to_owned(),
        }
    }
}

/// Legend block in the charting library's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    pub data: Vec<LegendEntry>,
    pub bottom: String,
    pub item_gap: u32,
    pub padding: [i32; 4],
    pub item_height: u32,
    pub item_width: u32,
    pub text_style: LegendTextStyle,
    pub selected_mode: bool,
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<IndexMap<String, bool>>,
}

impl LegendOption {
    /// `disabled_legend` hides the legend and turns off its click handling
    /// together; the two are never toggled separately.
    #[must_use]
    pub fn new(data: Vec<LegendEntry>, placement: LegendPlacement, disabled_legend: bool) -> Self {
        Self {
            orient: placement.orient,
            left: placement.left,
            data,
            bottom: "0%".to_owned(),
            item_gap: 4,
            padding: [0, 0, 0, 0],
            item_height: 8,
            item_width: 8,
            text_style: LegendTextStyle::default(),
            selected_mode: !disabled_legend,
            show: !disabled_legend,
            selected: None,
        }
    }

    /// Writes the `selected` map: every entry is selected unless disabled.
    pub fn apply_disabled<S: AsRef<str>>(&mut self, disabled: &[S]) {
        let selected = self
            .data
            .iter()
            .map(|entry| {
                let is_disabled = disabled.iter().any(|name| name.as_ref() == entry.name);
                (entry.name.clone(), !is_disabled)
            })
            .collect();
        self.selected = Some(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclassified_series_use_rect_icon() {
        assert_eq!(LegendIcon::for_axis(None), LegendIcon::Rect);
        assert_eq!(LegendIcon::for_axis(Some(AxisIndex::Primary)), LegendIcon::Circle);
        assert_eq!(LegendIcon::for_axis(Some(AxisIndex::Secondary)), LegendIcon::Rect);
    }

    #[test]
    fn disabled_legend_hides_and_locks_together() {
        let legend = LegendOption::new(Vec::new(), LegendPlacement::default(), true);
        assert!(!legend.show);
        assert!(!legend.selected_mode);
    }

    #[test]
    fn selected_map_is_complement_of_disabled_set() {
        let entries = vec![
            LegendEntry {
                name: "a".to_owned(),
                icon: LegendIcon::Circle,
            },
            LegendEntry {
                name: "b".to_owned(),
                icon: LegendIcon::Rect,
            },
        ];
        let mut legend = LegendOption::new(entries, LegendPlacement::default(), false);
        legend.apply_disabled(&["b"]);
        let selected = legend.selected.expect("selected map");
        assert_eq!(selected.get("a"), Some(&true));
        assert_eq!(selected.get("b"), Some(&false));
        assert_eq!(selected.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
