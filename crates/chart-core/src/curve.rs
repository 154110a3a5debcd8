// File: crates/chart-core/src/curve.rs
// Summary: Monotone-in-X cubic smoothing for line paths (no overshoot between points).

use std::fmt::Write as _;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

impl PathCommand {
    /// Vertex the command ends on, if any.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// Build the path through `points` (already in pixel space, ordered by x).
///
/// Tangents follow Steffen's method: at interior points the slope is
/// `(sign s0 + sign s1) * min(|s0|, |s1|, |p| / 2)` where `p` is the
/// weighted mean of the neighbouring secants; end tangents are
/// `(3s - t) / 2`. Each segment becomes a cubic Bézier whose control points
/// sit a third of the way along x, which keeps them inside the segment's
/// vertical span.
pub fn monotone_x(points: &[Point]) -> Vec<PathCommand> {
    let mut pts: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        // coincident points add nothing and would zero a secant
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }

    let mut out = Vec::with_capacity(pts.len() + 1);
    match pts.len() {
        0 => return out,
        1 => {
            out.push(PathCommand::MoveTo(pts[0]));
            out.push(PathCommand::Close);
            return out;
        }
        2 => {
            out.push(PathCommand::MoveTo(pts[0]));
            out.push(PathCommand::LineTo(pts[1]));
            return out;
        }
        _ => {}
    }

    let n = pts.len();
    let mut tangents = vec![0.0f64; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = end_slope(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = end_slope(pts[n - 2], pts[n - 1], tangents[n - 2]);

    out.push(PathCommand::MoveTo(pts[0]));
    for i in 0..n - 1 {
        out.push(hermite_segment(pts[i], pts[i + 1], tangents[i], tangents[i + 1]));
    }
    out
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p1.y - p0.y, h0, h1);
    let s1 = secant(p2.y - p1.y, h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() || s0.is_nan() || s1.is_nan() || p.is_nan() { 0.0 } else { t }
}

/// dy / h, where a zero-width step borrows its sign from the other step.
fn secant(dy: f64, h: f64, other: f64) -> f64 {
    if h != 0.0 {
        dy / h
    } else if other < 0.0 {
        dy / -0.0
    } else {
        dy / 0.0
    }
}

fn end_slope(a: Point, b: Point, t: f64) -> f64 {
    let h = b.x - a.x;
    if h != 0.0 { (3.0 * (b.y - a.y) / h - t) / 2.0 } else { t }
}

fn hermite_segment(a: Point, b: Point, t0: f64, t1: f64) -> PathCommand {
    let dx = (b.x - a.x) / 3.0;
    PathCommand::CubicTo {
        c1: Point::new(a.x + dx, a.y + dx * t0),
        c2: Point::new(b.x - dx, b.y - dx * t1),
        to: b,
    }
}

/// SVG `d` attribute for a command list.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for cmd in commands {
        // writing into a String cannot fail
        let _ = match *cmd {
            PathCommand::MoveTo(p) => write!(d, "M{},{}", num(p.x), num(p.y)),
            PathCommand::LineTo(p) => write!(d, "L{},{}", num(p.x), num(p.y)),
            PathCommand::CubicTo { c1, c2, to } => write!(
                d,
                "C{},{},{},{},{},{}",
                num(c1.x), num(c1.y), num(c2.x), num(c2.y), num(to.x), num(to.y)
            ),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

/// Compact decimal: at most three fractional digits, trailing zeros dropped.
pub fn num(v: f64) -> String {
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        while s.ends_with('0') { s.pop(); }
        if s.ends_with('.') { s.pop(); }
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_closes() {
        let cmds = monotone_x(&[Point::new(1.0, 2.0)]);
        assert_eq!(cmds, vec![PathCommand::MoveTo(Point::new(1.0, 2.0)), PathCommand::Close]);
        assert_eq!(to_svg_path(&cmds), "M1,2Z");
    }

    #[test]
    fn two_points_are_a_straight_line() {
        let cmds = monotone_x(&[Point::new(0.0, 0.0), Point::new(10.0, 5.5)]);
        assert_eq!(to_svg_path(&cmds), "M0,0L10,5.5");
    }

    #[test]
    fn flat_neighbourhood_gives_flat_tangent() {
        // a local peak must have a horizontal tangent, otherwise it overshoots
        let pts = [Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)];
        let cmds = monotone_x(&pts);
        match (cmds[1], cmds[2]) {
            (PathCommand::CubicTo { c2, .. }, PathCommand::CubicTo { c1, .. }) => {
                assert_eq!(c2.y, 0.0);
                assert_eq!(c1.y, 0.0);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(2.125), "2.125");
        assert_eq!(num(3.10), "3.1");
    }
}
