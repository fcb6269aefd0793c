// THEORY:
// The `report` module is the tabular output layer. Results are kept as typed
// `ResultRow` records appended in label order; column names only appear when the
// table is serialized. The CSV dialect is deliberately narrow: a fixed header, one
// line per row, no index column, labels that never need quoting.
//
// Numbers are written with `f64`'s shortest round-trip `Display`. An undefined
// contrast (NaN) is written as an empty field, the usual CSV spelling of a missing
// value.

use crate::core_modules::contrast::ContrastResult;
use crate::core_modules::error::{ContrastError, Result};
use crate::labels::LabelPair;
use std::fmt::Write as _;
use std::path::Path;

pub const COLUMNS: [&str; 6] = [
    "Condition",
    "Distance",
    "Overall_Contrast",
    "Band1_Contrast",
    "Band2_Contrast",
    "Band3_Contrast",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub labels: LabelPair,
    pub contrast: ContrastResult,
}

impl ResultRow {
    pub fn new(labels: LabelPair, contrast: ContrastResult) -> Self {
        Self { labels, contrast }
    }

    pub fn csv_header() -> String {
        COLUMNS.join(",")
    }

    pub fn to_csv_row(&self) -> String {
        let mut row = format!("{},{}", self.labels.condition, self.labels.distance);
        for value in self.contrast.to_array() {
            row.push(',');
            push_number(&mut row, value);
        }
        row
    }
}

fn push_number(out: &mut String, value: f64) {
    if !value.is_nan() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }
}

/// Ordered accumulator of result rows.
#[derive(Debug, Clone, Default)]
pub struct ContrastTable {
    rows: Vec<ResultRow>,
}

impl ContrastTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv_string(&self) -> String {
        let mut out = ResultRow::csv_header();
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.to_csv_row());
            out.push('\n');
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv_string()).map_err(|source| ContrastError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Extend<ResultRow> for ContrastTable {
    fn extend<T: IntoIterator<Item = ResultRow>>(&mut self, iter: T) {
        self.rows.extend(iter);
    }
}
