// File: crates/chart-core/src/series.rs
// Summary: Sample store: 1..=3 fixed-length series of normalised values.
// Notes:
// - Sample fields are private so the index cannot change after creation and
//   values only move through `SampleStore::set_value`, which clamps to [0, 1].

use rand::Rng;

use crate::error::{ChartError, Result};
use crate::types::MAX_SERIES;

/// Lowest and highest storable value.
pub const VALUE_DOMAIN: (f64, f64) = (0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    index: usize,
    value: f64,
}

impl Sample {
    fn new(index: usize, value: f64) -> Self {
        Self { index, value: clamp_value(value) }
    }
    pub fn index(&self) -> usize { self.index }
    pub fn value(&self) -> f64 { self.value }
}

/// Identifies one sample: which series, and its index inside that series.
/// Doubles as the datum bound to a rendered marker and as the drag selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerRef {
    pub series: usize,
    pub index: usize,
}

impl MarkerRef {
    pub const fn new(series: usize, index: usize) -> Self {
        Self { series, index }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    position: usize,
    samples: Vec<Sample>,
}

impl Series {
    fn from_values(position: usize, values: &[f64]) -> Self {
        let samples = values.iter().enumerate().map(|(i, &v)| Sample::new(i, v)).collect();
        Self { position, samples }
    }

    /// Position among the chart's series; selects the palette colour.
    pub fn position(&self) -> usize { self.position }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleStore {
    series: Vec<Series>,
}

impl SampleStore {
    /// Build a store from explicit values, one row per series.
    /// Values are clamped into [0, 1]; rows must share one length.
    pub fn from_values(rows: Vec<Vec<f64>>) -> Result<Self> {
        validate_series_count(rows.len())?;
        let expected = rows[0].len();
        if expected == 0 {
            return Err(ChartError::InvalidConfig("series must hold at least one sample".into()));
        }
        let mut series = Vec::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ChartError::LengthMismatch { series: position, len: row.len(), expected });
            }
            if let Some(&bad) = row.iter().find(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteValue(bad));
            }
            series.push(Series::from_values(position, row));
        }
        Ok(Self { series })
    }

    /// Uniform random values in [0, 1), generated once at mount.
    pub fn random<R: Rng + ?Sized>(series_count: usize, sample_count: usize, rng: &mut R) -> Result<Self> {
        let rows = (0..series_count)
            .map(|_| (0..sample_count).map(|_| rng.random::<f64>()).collect())
            .collect();
        Self::from_values(rows)
    }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn series_count(&self) -> usize { self.series.len() }

    /// Samples per series (identical for every series).
    pub fn sample_count(&self) -> usize {
        self.series.first().map(Series::len).unwrap_or(0)
    }

    pub fn get(&self, series: usize) -> Option<&Series> { self.series.get(series) }

    pub fn sample(&self, marker: MarkerRef) -> Option<&Sample> {
        self.series.get(marker.series)?.samples.get(marker.index)
    }

    pub fn contains(&self, marker: MarkerRef) -> bool {
        self.sample(marker).is_some()
    }

    /// The only mutation path. Returns the stored (clamped) value.
    pub fn set_value(&mut self, series: usize, index: usize, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue(value));
        }
        let count = self.series.len();
        let s = self.series.get_mut(series).ok_or(ChartError::UnknownSeries { series, count })?;
        let len = s.samples.len();
        let sample = s.samples.get_mut(index).ok_or(ChartError::UnknownSample { series, index, len })?;
        sample.value = clamp_value(value);
        Ok(sample.value)
    }
}

pub(crate) fn validate_series_count(count: usize) -> Result<()> {
    if count == 0 || count > MAX_SERIES {
        return Err(ChartError::InvalidConfig(format!(
            "series count must be between 1 and {MAX_SERIES}, got {count}"
        )));
    }
    Ok(())
}

fn clamp_value(v: f64) -> f64 {
    v.clamp(VALUE_DOMAIN.0, VALUE_DOMAIN.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_store_is_seedable_and_in_range() {
        let a = SampleStore::random(3, 10, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = SampleStore::random(3, 10, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.series_count(), 3);
        assert_eq!(a.sample_count(), 10);
        for s in a.series() {
            for (i, sample) in s.samples().iter().enumerate() {
                assert_eq!(sample.index(), i);
                assert!((0.0..1.0).contains(&sample.value()));
            }
        }
    }

    #[test]
    fn set_value_clamps_and_rejects_unknown_targets() {
        let mut store = SampleStore::from_values(vec![vec![0.2, 0.5]]).unwrap();
        assert_eq!(store.set_value(0, 1, 1.7).unwrap(), 1.0);
        assert_eq!(store.set_value(0, 0, -3.0).unwrap(), 0.0);
        assert!(matches!(store.set_value(1, 0, 0.3), Err(ChartError::UnknownSeries { .. })));
        assert!(matches!(store.set_value(0, 2, 0.3), Err(ChartError::UnknownSample { .. })));
        assert!(matches!(store.set_value(0, 0, f64::NAN), Err(ChartError::NonFiniteValue(_))));
        assert_eq!(store.get(0).unwrap().values().collect::<Vec<_>>(), vec![0.0, 1.0]);
    }

    #[test]
    fn from_values_rejects_ragged_and_oversized_input() {
        assert!(matches!(
            SampleStore::from_values(vec![vec![0.1, 0.2], vec![0.3]]),
            Err(ChartError::LengthMismatch { series: 1, len: 1, expected: 2 })
        ));
        assert!(SampleStore::from_values(vec![vec![0.1]; 4]).is_err());
        assert!(SampleStore::from_values(Vec::new()).is_err());
    }
}
