//! Data-side helpers for the sticky table: sorting, column selection,
//! clipboard text and pinned-column styles.
//!
//! Virtualized windowing, DOM measurement and the clipboard write itself stay
//! with the host.

mod clipboard;
mod layout;
mod selection;
mod sort;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use clipboard::{
    AUTO_INDEX_COLUMN, cell_text, column_text, quote_value, row_text, table_text, value_text,
};
pub use layout::{
    CssPosition, LAST_LEFT_PINNED_CLASS, PinningStyle, is_last_left_pinned, left_pinned_start,
    pinning_class, pinning_style, px_to_vw, row_expand_class,
};
pub use selection::ColumnSelection;
pub use sort::{SortConfig, SortDirection, SortValueKind, sort_rows, sort_rows_with};

/// One table record keyed by column accessor, in column order.
pub type TableRow = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// Column definition as laid out by the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    #[serde(default)]
    pub header: String,
    /// Row key holding this column's value. Defaults to `id`.
    #[serde(default)]
    pub accessor_key: Option<String>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub pinned: Option<PinSide>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl TableColumn {
    #[must_use]
    pub fn new(id: impl Into<String>, header: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor_key: None,
            width,
            pinned: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn pinned(mut self, side: PinSide) -> Self {
        self.pinned = Some(side);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn accessor(&self) -> &str {
        self.accessor_key.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub fn is_auto_index(&self) -> bool {
        self.id == AUTO_INDEX_COLUMN
    }
}
