// File: crates/chart-core/src/readout.rs
// Summary: Readout panel: one row of two-decimal values per series.

use std::fmt;

use crate::series::{SampleStore, Series};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadoutRow {
    pub series: usize,
    pub cells: Vec<String>,
}

impl ReadoutRow {
    fn from_series(series: &Series) -> Self {
        Self { series: series.position(), cells: series.values().map(|v| format!("{v:.2}")).collect() }
    }
}

impl fmt::Display for ReadoutRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cells.join("  "))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    rows: Vec<ReadoutRow>,
}

impl Readout {
    pub fn from_store(store: &SampleStore) -> Self {
        Self { rows: store.series().iter().map(ReadoutRow::from_series).collect() }
    }

    pub fn refresh(&mut self, store: &SampleStore) {
        *self = Self::from_store(store);
    }

    /// Recompute one series' row, leaving the others untouched.
    pub fn refresh_series(&mut self, store: &SampleStore, series: usize) {
        let Some(s) = store.get(series) else { return };
        match self.rows.get_mut(series) {
            Some(row) => *row = ReadoutRow::from_series(s),
            None => self.refresh(store),
        }
    }

    pub fn rows(&self) -> &[ReadoutRow] { &self.rows }

    /// Display strings, one per series.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(ToString::to_string).collect()
    }
}
