use crate::geometry::cubic::BezierPath;
use crate::geometry::intersect::lines_intersection;
use crate::model::Vec2;

/// Uniformly sample every element of `path` into a polyline.
///
/// The output starts with the first element's start point, followed by
/// `segments_per_element` samples per element (t = i/n, i = 1..=n).
pub fn flatten_curve(path: &BezierPath, segments_per_element: usize) -> Vec<Vec2> {
    let n = segments_per_element.max(1);
    let mut points = Vec::with_capacity(path.element_count() * n + 1);
    let Some(first) = path.segments.first() else { return points; };
    points.push(first.p0);
    for curve in &path.segments {
        for i in 1..=n {
            let t = i as f32 / n as f32;
            points.push(curve.eval(t));
        }
    }
    points
}

/// First crossing between the flattened paths, in traversal order of `a` then `b`.
/// The hit is not necessarily the geometrically closest one.
pub fn first_curve_intersection(a: &BezierPath, b: &BezierPath, segments_per_element: usize) -> Option<Vec2> {
    if let (Some(ba), Some(bb)) = (a.bounds(), b.bounds()) {
        if !ba.intersects(&bb) {
            return None;
        }
    }
    let pa = flatten_curve(a, segments_per_element);
    let pb = flatten_curve(b, segments_per_element);
    for sa in pa.windows(2) {
        for sb in pb.windows(2) {
            if let Some(hit) = lines_intersection(sa[0], sa[1], sb[0], sb[1]) {
                return Some(hit);
            }
        }
    }
    None
}
