use serde::{Deserialize, Serialize};

use crate::constants::{CONLL_FIELD_COUNT, CONLL_FIELD_NAMES};
use crate::record::ConllRecord;

/// Tabular view of CoNLL records: one row per token, the ten CoNLL-U fields
/// as columns, plus an explicit 0-based row index.
///
/// Only available with the `tabular` feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConllTable {
    rows: Vec<[String; CONLL_FIELD_COUNT]>,
    index: Vec<usize>,
}

impl ConllTable {
    /// Builds a table over the given records, indexed `0..records.len()`.
    pub fn from_records(records: &[ConllRecord]) -> Self {
        Self {
            rows: records.iter().map(ConllRecord::values).collect(),
            index: (0..records.len()).collect(),
        }
    }

    /// Concatenates tables row-wise with a freshly reset contiguous index.
    pub fn concat(tables: impl IntoIterator<Item = ConllTable>) -> Self {
        let rows: Vec<[String; CONLL_FIELD_COUNT]> = tables
            .into_iter()
            .flat_map(|table| table.rows)
            .collect();
        let index = (0..rows.len()).collect();
        Self { rows, index }
    }

    /// The column names, fixed to the ten CoNLL-U fields in canonical order.
    pub fn columns(&self) -> [&'static str; CONLL_FIELD_COUNT] {
        CONLL_FIELD_NAMES
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in order.
    pub fn rows(&self) -> &[[String; CONLL_FIELD_COUNT]] {
        &self.rows
    }

    /// The row index.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// One row by index position.
    pub fn row(&self, position: usize) -> Option<&[String; CONLL_FIELD_COUNT]> {
        self.rows.get(position)
    }

    /// All values of one named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let position = CONLL_FIELD_NAMES.iter().position(|field| *field == name)?;
        Some(self.rows.iter().map(|row| row[position].as_str()).collect())
    }
}
