// File: crates/chart-core/src/scale.rs
// Summary: Linear scales for the sample index (X) and value (Y) axes, with tick generation and X zoom.

use crate::series::VALUE_DOMAIN;
use crate::types::PlotLayout;

/// Continuous linear map from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain value to pixel. A zero-width domain maps to the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel to domain value. A zero-height range maps to the middle of the domain.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Label formatter with just enough decimals to tell adjacent ticks apart.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let decimals = tick_decimals(self.domain.0, self.domain.1, count);
        move |v: f64| {
            let s = format!("{v:.decimals$}");
            // "-0.0" and friends read as zero
            if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
                s[1..].to_string()
            } else {
                s
            }
        }
    }
}

/// The scale pair of one chart, plus the X domain a zoom resets to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    home_x: (f64, f64),
}

impl Scales {
    /// X covers sample indices `[0, N-1]` over the inner width; Y covers the
    /// value domain with 0 at the bottom.
    pub fn for_layout(layout: &PlotLayout, sample_count: usize) -> Self {
        let home_x = (0.0, sample_count.saturating_sub(1) as f64);
        let x = LinearScale::new(home_x, (0.0, layout.inner_width()));
        let y = LinearScale::new(VALUE_DOMAIN, (layout.inner_height(), 0.0));
        Self { x, y, home_x }
    }

    #[inline]
    pub fn position(&self, index: usize, value: f64) -> (f64, f64) {
        (self.x.map(index as f64), self.y.map(value))
    }

    /// Narrow the X domain to the data between two plot-local pixel columns.
    pub fn zoom_x(&mut self, px0: f64, px1: f64) {
        let (a, b) = (self.x.invert(px0), self.x.invert(px1));
        self.x.set_domain((a.min(b), a.max(b)));
    }

    pub fn reset_x(&mut self) {
        self.x.set_domain(self.home_x);
    }

    pub fn home_x(&self) -> (f64, f64) { self.home_x }

    pub fn is_zoomed(&self) -> bool { self.x.domain != self.home_x }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds and increment. A negative increment `-k` means a step of `1/k`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Evenly spaced round values in `[start, stop]` (either order).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

fn tick_decimals(start: f64, stop: f64, count: usize) -> usize {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if hi == lo || count == 0 || !lo.is_finite() || !hi.is_finite() {
        return 0;
    }
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { ((-inc).log10() - 1e-9).ceil().max(0.0) as usize } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Insets, Viewport};

    #[test]
    fn map_and_invert_are_inverse() {
        let s = LinearScale::new((0.0, 1.0), (300.0, 0.0));
        assert_eq!(s.map(0.0), 300.0);
        assert_eq!(s.map(1.0), 0.0);
        for px in [0.0, 12.5, 150.0, 299.0] {
            assert!((s.map(s.invert(px)) - px).abs() < 1e-9);
        }
    }

    #[test]
    fn values_survive_a_pixel_round_trip() {
        let y = LinearScale::new((0.0, 1.0), (300.0, 0.0));
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert!((y.invert(y.map(v)) - v).abs() < 1e-12, "v = {v}");
        }

        let layout = PlotLayout::from_viewport(Viewport::new(900.0, 300.0), 1.0, 1.0, Insets::uniform(0));
        let mut scales = Scales::for_layout(&layout, 10);
        scales.zoom_x(200.0, 450.0);
        for v in [2.0, 2.5, 3.3, 4.5, 7.0] {
            assert!((scales.x.invert(scales.x.map(v)) - v).abs() < 1e-9, "v = {v}");
        }
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let s = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(s.map(0.0), 50.0);
        let flat = LinearScale::new((0.0, 1.0), (0.0, 0.0));
        assert_eq!(flat.invert(0.0), 0.5);
    }

    #[test]
    fn unit_ticks() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[3], 0.3);
        let format = LinearScale::new((0.0, 1.0), (0.0, 1.0)).tick_format(10);
        let labels: Vec<String> = t.iter().map(|v| format(*v)).collect();
        assert_eq!(labels[0], "0.0");
        assert_eq!(labels[10], "1.0");
    }

    #[test]
    fn index_ticks_are_integers() {
        let s = LinearScale::new((0.0, 9.0), (0.0, 900.0));
        assert_eq!(s.ticks(10), (0..10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(s.tick_format(10)(4.0), "4");
    }

    #[test]
    fn zoomed_domain_ticks() {
        let s = LinearScale::new((2.3, 5.7), (0.0, 900.0));
        let t = s.ticks(10);
        assert_eq!(t[0], 2.5);
        assert_eq!(*t.last().unwrap(), 5.5);
        assert_eq!(s.tick_format(10)(3.0), "3.0");
    }

    #[test]
    fn reversed_ticks_descend() {
        assert_eq!(ticks(1.0, 0.0, 2), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn zoom_and_reset() {
        let layout = PlotLayout::from_viewport(Viewport::new(1000.0, 1000.0), 1.0, 1.0, Insets::uniform(50));
        let mut scales = Scales::for_layout(&layout, 10);
        assert_eq!(scales.x.domain, (0.0, 9.0));
        scales.zoom_x(450.0, 200.0);
        assert!(scales.is_zoomed());
        assert!((scales.x.domain.0 - 2.0).abs() < 1e-9);
        assert!((scales.x.domain.1 - 4.5).abs() < 1e-9);
        scales.reset_x();
        assert_eq!(scales.x.domain, scales.home_x());
        assert!(!scales.is_zoomed());
    }
}
