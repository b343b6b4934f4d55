//! Pixel-space geometry: dash patterns, marker outlines, pie wedges, hatching.
//!
//! Plotters strokes are solid only and has no wedge or hatch primitive, so
//! these are computed here and drawn as plain paths/polygons.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub type Px = (i32, i32);

fn to_px((x, y): (f64, f64)) -> Px {
    (x.round() as i32, y.round() as i32)
}

/// Split a polyline into "on" runs of an alternating on/off `pattern` (pixels).
///
/// An empty pattern returns the whole path as one run. The pattern phase
/// carries across vertices so dashes flow around corners.
pub fn dash_segments(path: &[Px], pattern: &[u32]) -> Vec<Vec<Px>> {
    if path.len() < 2 || pattern.is_empty() || pattern.iter().all(|p| *p == 0) {
        return vec![path.to_vec()];
    }

    let mut out: Vec<Vec<Px>> = Vec::new();
    let mut idx = 0usize; // position in pattern
    let mut left = pattern[0] as f64; // remaining length of the current run
    let mut current: Vec<Px> = vec![path[0]];

    for w in path.windows(2) {
        let (a, b) = ((w[0].0 as f64, w[0].1 as f64), (w[1].0 as f64, w[1].1 as f64));
        let seg_len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if seg_len == 0.0 {
            continue;
        }
        let mut t = 0.0f64;
        while t < seg_len {
            let step = left.min(seg_len - t);
            t += step;
            left -= step;
            let p = to_px((
                a.0 + (b.0 - a.0) * t / seg_len,
                a.1 + (b.1 - a.1) * t / seg_len,
            ));
            let on = idx % 2 == 0;
            if on {
                current.push(p);
            }
            if left <= 0.0 {
                if on {
                    out.push(std::mem::take(&mut current));
                } else {
                    current = vec![p];
                }
                idx = (idx + 1) % pattern.len();
                left = pattern[idx] as f64;
            }
        }
    }
    if idx % 2 == 0 && current.len() > 1 {
        out.push(current);
    }
    out.retain(|run| run.len() > 1);
    out
}

/// Five-pointed star outline centered on `c`, point up.
pub fn star_points(c: Px, outer: i32) -> Vec<Px> {
    let inner = outer as f64 * 0.45;
    (0..10)
        .map(|k| {
            let r = if k % 2 == 0 { outer as f64 } else { inner };
            let a = -FRAC_PI_2 + k as f64 * PI / 5.0;
            to_px((c.0 as f64 + r * a.cos(), c.1 as f64 + r * a.sin()))
        })
        .collect()
}

/// A pie wedge in pixel space. Angles in radians, counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: (f64, f64),
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Point at `r` from the center along angle `a` (y flipped for screen space).
    pub fn point_at(&self, a: f64, r: f64) -> (f64, f64) {
        (self.center.0 + r * a.cos(), self.center.1 - r * a.sin())
    }

    /// Same wedge pushed outward by `fraction` of the radius along its bisector.
    pub fn exploded(&self, fraction: f64) -> Wedge {
        let mid = self.mid_angle();
        let d = fraction * self.radius;
        Wedge {
            center: (
                self.center.0 + d * mid.cos(),
                self.center.1 - d * mid.sin(),
            ),
            ..*self
        }
    }

    /// Closed outline: center, then the arc in ~1° steps.
    pub fn polygon(&self) -> Vec<Px> {
        let sweep = self.end - self.start;
        let steps = ((sweep.abs() / (PI / 180.0)).ceil() as usize).max(1);
        let mut pts = Vec::with_capacity(steps + 2);
        pts.push(to_px(self.center));
        for i in 0..=steps {
            let a = self.start + sweep * i as f64 / steps as f64;
            pts.push(to_px(self.point_at(a, self.radius)));
        }
        pts
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        let dx = p.0 - self.center.0;
        let dy = self.center.1 - p.1;
        if dx * dx + dy * dy > self.radius * self.radius {
            return false;
        }
        if self.end - self.start >= TAU - 1e-9 {
            return true;
        }
        let a = dy.atan2(dx);
        let rel = (a - self.start).rem_euclid(TAU);
        rel <= (self.end - self.start)
    }

    /// Hatch strokes clipped to the wedge, one family per direction, `spacing` px apart.
    pub fn hatch_segments(&self, directions: &[(f64, f64)], spacing: f64) -> Vec<[Px; 2]> {
        let mut out = Vec::new();
        let r = self.radius;
        let c = self.center;
        for &(dx, dy) in directions {
            let normal = (-dy, dx);
            let mut offset = -r;
            while offset <= r {
                let base = (c.0 + normal.0 * offset, c.1 + normal.1 * offset);
                let mut run_start: Option<(f64, f64)> = None;
                let mut last_inside = base;
                let mut s = -r;
                while s <= r {
                    let p = (base.0 + dx * s, base.1 + dy * s);
                    if self.contains(p) {
                        if run_start.is_none() {
                            run_start = Some(p);
                        }
                        last_inside = p;
                    } else if let Some(start) = run_start.take() {
                        out.push([to_px(start), to_px(last_inside)]);
                    }
                    s += 1.0;
                }
                if let Some(start) = run_start {
                    out.push([to_px(start), to_px(last_inside)]);
                }
                offset += spacing;
            }
        }
        out.retain(|[a, b]| a != b);
        out
    }
}

/// Lay out pie wedges for `values`, starting at `start_deg` and running counter-clockwise.
pub fn pie_wedges(values: &[f64], center: (f64, f64), radius: f64, start_deg: f64) -> Vec<Wedge> {
    let total: f64 = values.iter().sum();
    let mut a = start_deg.to_radians();
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 { v / total * TAU } else { 0.0 };
            let w = Wedge {
                center,
                radius,
                start: a,
                end: a + sweep,
            };
            a += sweep;
            w
        })
        .collect()
}
