use serde::{Deserialize, Serialize};

use super::{PinSide, TableColumn};

pub const LAST_LEFT_PINNED_CLASS: &str = "last-left-pinned-column";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssPosition {
    Sticky,
    Relative,
}

/// Inline style for a header or body cell of one column, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinningStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    pub opacity: f64,
    pub position: CssPosition,
    pub width: f64,
    pub z_index: i32,
}

impl PinningStyle {
    /// Same style with lengths converted to `vw` for a mobile design width.
    #[must_use]
    pub fn to_vw(self, design_width_px: f64) -> Self {
        Self {
            left: self.left.map(|left| px_to_vw(left, design_width_px)),
            width: px_to_vw(self.width, design_width_px),
            ..self
        }
    }
}

/// `px / design_width * 100`, rounded to 3 decimals.
#[must_use]
pub fn px_to_vw(px: f64, design_width_px: f64) -> f64 {
    if design_width_px <= 0.0 {
        return px;
    }
    (px / design_width_px * 100.0 * 1_000.0).round() / 1_000.0
}

/// Offset of a left-pinned column: widths of the visible left-pinned columns
/// before it.
#[must_use]
pub fn left_pinned_start(columns: &[TableColumn], index: usize) -> f64 {
    columns
        .iter()
        .take(index)
        .filter(|column| column.visible && column.pinned == Some(PinSide::Left))
        .map(|column| column.width)
        .sum()
}

/// Pinned columns stick and float above their neighbours at 95% opacity.
#[must_use]
pub fn pinning_style(columns: &[TableColumn], index: usize) -> Option<PinningStyle> {
    let column = columns.get(index)?;
    let pinned = column.pinned.is_some();
    Some(PinningStyle {
        left: (column.pinned == Some(PinSide::Left)).then(|| left_pinned_start(columns, index)),
        opacity: if pinned { 0.95 } else { 1.0 },
        position: if pinned {
            CssPosition::Sticky
        } else {
            CssPosition::Relative
        },
        width: column.width,
        z_index: i32::from(pinned),
    })
}

/// The right-most visible left-pinned column draws the separator shadow.
#[must_use]
pub fn is_last_left_pinned(columns: &[TableColumn], index: usize) -> bool {
    let last = columns
        .iter()
        .enumerate()
        .filter(|(_, column)| column.visible && column.pinned == Some(PinSide::Left))
        .map(|(position, _)| position)
        .next_back();
    last == Some(index)
}

#[must_use]
pub fn pinning_class(columns: &[TableColumn], index: usize) -> &'static str {
    if is_last_left_pinned(columns, index) {
        LAST_LEFT_PINNED_CLASS
    } else {
        ""
    }
}

/// Class list of a body row in a tree table.
#[must_use]
pub fn row_expand_class(can_expand: bool, depth: usize) -> String {
    let expandable = if can_expand {
        "sticky-table-expanded-row"
    } else {
        ""
    };
    format!("{expandable} expand-{depth}")
}
