// File: crates/chart-core/tests/curve.rs
// Purpose: Monotone-X smoothing never overshoots the data and passes through every point.

use chart_core::curve::{monotone_x, to_svg_path, PathCommand};
use chart_core::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bezier(a: f64, c1: f64, c2: f64, b: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * a + 3.0 * u * u * t * c1 + 3.0 * u * t * t * c2 + t * t * t * b
}

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
    let mut x = 0.0;
    (0..n)
        .map(|_| {
            x += rng.random_range(1.0..80.0);
            Point::new(x, rng.random::<f64>() * 400.0)
        })
        .collect()
}

#[test]
fn segments_stay_within_their_endpoints() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for round in 0..200 {
        let n = 3 + round % 12;
        let pts = random_points(&mut rng, n);
        let cmds = monotone_x(&pts);
        assert_eq!(cmds.len(), n);

        let mut from = pts[0];
        for (cmd, &to) in cmds[1..].iter().zip(&pts[1..]) {
            let PathCommand::CubicTo { c1, c2, to: end } = *cmd else {
                panic!("expected cubic segment, got {cmd:?}");
            };
            assert_eq!(end, to);
            let (lo, hi) = (from.y.min(to.y) - 1e-9, from.y.max(to.y) + 1e-9);
            for step in 0..=20 {
                let t = step as f64 / 20.0;
                let y = bezier(from.y, c1.y, c2.y, to.y, t);
                assert!(lo <= y && y <= hi, "round {round}: y={y} outside [{lo}, {hi}]");
                let x = bezier(from.x, c1.x, c2.x, to.x, t);
                assert!(from.x - 1e-9 <= x && x <= to.x + 1e-9);
            }
            from = to;
        }
    }
}

#[test]
fn monotone_data_gives_monotone_curve() {
    let pts: Vec<Point> = [0.0, 1.0, 1.5, 4.0, 4.1, 9.0].iter().enumerate().map(|(i, &y)| Point::new(i as f64 * 10.0, y)).collect();
    let cmds = monotone_x(&pts);
    let mut last = f64::NEG_INFINITY;
    let mut from = pts[0];
    for cmd in &cmds[1..] {
        if let PathCommand::CubicTo { c1, c2, to } = *cmd {
            for step in 0..=50 {
                let y = bezier(from.y, c1.y, c2.y, to.y, step as f64 / 50.0);
                assert!(y >= last - 1e-9);
                last = y;
            }
            from = to;
        }
    }
}

#[test]
fn duplicate_points_collapse() {
    let p = Point::new(5.0, 5.0);
    assert_eq!(to_svg_path(&monotone_x(&[p, p, p])), "M5,5Z");
    assert!(monotone_x(&[]).is_empty());
}
