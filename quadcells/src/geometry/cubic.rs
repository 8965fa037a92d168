//! Cubic Bézier elements and the curve paths cells hand to the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::model::{Rect, Vec2};

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Vec2, // Start point
    pub p1: Vec2, // First control point
    pub p2: Vec2, // Second control point
    pub p3: Vec2, // End point
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Vec2 {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// Bounds of the control polygon (contains the curve).
    pub fn aabb(&self) -> Rect {
        let r = Rect { min: self.p0, max: self.p0 };
        [self.p1, self.p2, self.p3]
            .into_iter()
            .fold(r, |acc, p| acc.union(Rect { min: p, max: p }))
    }

    pub fn as_array(&self) -> [Vec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

/// Ordered cubic elements of a cell outline. Consecutive elements share end/start points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    pub segments: Vec<CubicBezier>,
    pub closed: bool,
}

impl BezierPath {
    pub fn element_count(&self) -> usize {
        self.segments.len()
    }

    pub fn element(&self, index: usize) -> Option<&CubicBezier> {
        self.segments.get(index)
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.segments.iter().map(CubicBezier::aabb).reduce(Rect::union)
    }

    /// SVG path data (`M … C … [Z]`).
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        let Some(first) = self.segments.first() else { return d; };
        let _ = write!(d, "M {} {}", first.p0.x, first.p0.y);
        for s in &self.segments {
            let _ = write!(d, " C {} {} {} {} {} {}", s.p1.x, s.p1.y, s.p2.x, s.p2.y, s.p3.x, s.p3.y);
        }
        if self.closed {
            d.push_str(" Z");
        }
        d
    }

    /// Flat `[p0x, p0y, p1x, p1y, p2x, p2y, p3x, p3y]` per element.
    pub fn to_flat_array(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.segments.len() * 8);
        for s in &self.segments {
            for p in s.as_array() {
                out.push(p.x);
                out.push(p.y);
            }
        }
        out
    }
}
