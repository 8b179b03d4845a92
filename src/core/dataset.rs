use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::types::{Cell, SENTINEL, SeriesValue};
use crate::error::{ChartError, ChartResult};

const INDICATOR_SEPARATOR: char = '-';

/// Series identity carried from ingestion onward.
///
/// Compound names encode a hierarchical prefix (`"region-revenue"`); only the
/// leaf after the last `-` identifies the indicator definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    pub compound: String,
    pub indicator: String,
}

impl SeriesKey {
    #[must_use]
    pub fn new(compound: impl Into<String>) -> Self {
        let compound = compound.into();
        let indicator = compound
            .rsplit(INDICATOR_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_owned();
        Self {
            compound,
            indicator,
        }
    }

    /// Everything before the indicator leaf, if the name has a prefix.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.compound
            .rsplit_once(INDICATOR_SEPARATOR)
            .map(|(prefix, _)| prefix)
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.compound == SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub key: SeriesKey,
    pub values: Vec<SeriesValue>,
}

/// Dataset split into category labels and named value rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDataset {
    pub categories: Vec<String>,
    pub rows: Vec<DatasetRow>,
    pub dropped_sentinel_rows: usize,
}

impl NormalizedDataset {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.values.len())
            .max()
            .unwrap_or(0)
    }
}

/// Splits `source` into the category header and its data rows.
///
/// Row 0 holds category labels behind a placeholder cell. Every other row is
/// `[name, ...values]`; rows named `"-"` are dropped.
pub fn normalize_dataset(source: &[Vec<Cell>]) -> ChartResult<NormalizedDataset> {
    let Some((header, body)) = source.split_first() else {
        return Err(ChartError::InvalidDataset(
            "dataset source has no rows".to_owned(),
        ));
    };

    let categories = header.iter().skip(1).map(Cell::as_label).collect();

    let mut rows = Vec::with_capacity(body.len());
    let mut dropped_sentinel_rows = 0;
    for (position, row) in body.iter().enumerate() {
        let Some((name, values)) = row.split_first() else {
            return Err(ChartError::InvalidDataset(format!(
                "dataset row {} has no series name",
                position + 1
            )));
        };

        let key = SeriesKey::new(name.as_label());
        if key.is_sentinel() {
            dropped_sentinel_rows += 1;
            trace!(row = position + 1, "dropping sentinel dataset row");
            continue;
        }

        rows.push(DatasetRow {
            key,
            values: values.iter().map(Cell::as_value).collect(),
        });
    }

    debug!(
        categories = header.len().saturating_sub(1),
        rows = rows.len(),
        dropped_sentinel_rows,
        "normalized dataset"
    );

    Ok(NormalizedDataset {
        categories,
        rows,
        dropped_sentinel_rows,
    })
}
