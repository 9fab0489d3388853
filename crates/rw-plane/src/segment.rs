//! Closed line segments and segment–segment intersection.
//!
//! # Parametrisation
//!
//! A segment `a → b` is `a + t·(b − a)` for `t ∈ [0, 1]`.  For two segments
//! `p + t·r` and `q + u·s` the crossing parameters are
//!
//! ```text
//! t = (q − p) × s / (r × s)
//! u = (q − p) × r / (r × s)
//! ```
//!
//! with `×` the 2-D cross product.  `r × s ≈ 0` means parallel; parallel
//! segments only meet when they are also collinear, in which case the
//! overlap interval is found by projecting onto `r`.
//!
//! Segments are closed: touching at an endpoint is an intersection.

use rw_core::Point;

/// Relative tolerance for parallelism / collinearity and parameter bounds.
const EPSILON: f64 = 1e-12;

/// A closed line segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end:   Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `true` if `p` lies on this segment (endpoints included).
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p == self.start;
        }
        let r = self.direction();
        let rel = p - self.start;
        if rel.cross(r).abs() > EPSILON * r.norm() * rel.norm().max(1.0) {
            return false;
        }
        let t = rel.dot(r) / r.dot(r);
        (-EPSILON..=1.0 + EPSILON).contains(&t)
    }

    /// The point shared by `self` and `other` that lies closest to `from`,
    /// or `None` if the segments do not meet.
    ///
    /// Crossing segments share exactly one point.  Collinear overlapping
    /// segments share an interval; the interval endpoint nearer to `from` is
    /// returned.
    pub fn intersection_nearest(&self, other: &Segment, from: Point) -> Option<Point> {
        if self.is_degenerate() {
            return other.contains(self.start).then_some(self.start);
        }
        if other.is_degenerate() {
            return self.contains(other.start).then_some(other.start);
        }

        let r = self.direction();
        let s = other.direction();
        let qp = other.start - self.start;
        let denom = r.cross(s);

        if denom.abs() > EPSILON * r.norm() * s.norm() {
            let t = qp.cross(s) / denom;
            let u = qp.cross(r) / denom;
            let in_range = |v: f64| (-EPSILON..=1.0 + EPSILON).contains(&v);
            return (in_range(t) && in_range(u)).then(|| self.start + r * t.clamp(0.0, 1.0));
        }

        // Parallel: only collinear segments can overlap.
        if qp.cross(r).abs() > EPSILON * r.norm() * qp.norm().max(1.0) {
            return None;
        }

        let rr = r.dot(r);
        let t0 = qp.dot(r) / rr;
        let t1 = t0 + s.dot(r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi + EPSILON {
            return None;
        }

        let a = self.start + r * lo;
        let b = self.start + r * hi.max(lo);
        if from.distance_sq(a) <= from.distance_sq(b) { Some(a) } else { Some(b) }
    }
}
