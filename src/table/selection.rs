use serde::{Deserialize, Serialize};

/// Single selected column of the table, target of column copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSelection {
    selected: Option<String>,
}

impl ColumnSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set(&mut self, column_id: Option<String>) {
        self.selected = column_id;
    }

    /// A header click toggles selection; `force` always selects.
    pub fn click(&mut self, column_id: &str, force: bool) {
        if !force && self.selected.as_deref() == Some(column_id) {
            self.selected = None;
        } else {
            self.selected = Some(column_id.to_owned());
        }
    }
}
