// File: crates/demo/src/data.rs
// Summary: Load explicit sample values from CSV: one row per series, one column per sample.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chart_core::SampleStore;
use tracing::{debug, warn};

pub fn load_values_csv(path: &Path) -> Result<SampleStore> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_values(file).with_context(|| format!("reading {}", path.display()))
}

pub fn parse_values(reader: impl Read) -> Result<SampleStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        let mut row = Vec::with_capacity(rec.len());
        for (col, cell) in rec.iter().enumerate() {
            let v = cell
                .parse::<f64>()
                .with_context(|| format!("row {}, column {}: '{cell}' is not a number", line + 1, col + 1))?;
            if !(0.0..=1.0).contains(&v) {
                warn!(row = line + 1, column = col + 1, value = v, "value outside [0, 1]; it will be clamped");
            }
            row.push(v);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        bail!("no rows found");
    }
    debug!(series = rows.len(), samples = rows[0].len(), "loaded values");
    Ok(SampleStore::from_values(rows)?)
}
