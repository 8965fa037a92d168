use super::tolerance::clamp01;
use crate::model::Vec2;

/// Signed area of the triangle (a, b, p) times two: `cross(b - a, p - a)`.
#[inline]
pub fn orient(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (b - a).cross(p - a)
}

/// True if `point` lies strictly on the smaller-y side of the line through `a` and `b`.
/// The result does not depend on the order of `a` and `b`. Meaningless for vertical lines.
pub fn is_above_line(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let o = orient(point, a, b);
    if b.x >= a.x { o < 0.0 } else { o > 0.0 }
}

/// Even-odd containment test against a closed polyline.
pub fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True if `point` lies strictly on the larger-x side of the line through `a` and `b`.
/// The result does not depend on the order of `a` and `b`. Meaningless for horizontal lines.
pub fn is_on_right_side_of_line(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let o = orient(point, a, b);
    if b.y >= a.y { o < 0.0 } else { o > 0.0 }
}

/// Squared distance from `p` to segment `ab`, plus the clamped parameter of the closest point.
pub fn seg_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> (f32, f32) {
    let v = b - a;
    let w = p - a;
    let vv = v.dot(v);
    let t = if vv > 0.0 { clamp01(w.dot(v) / vv) } else { 0.0 };
    let proj = a + v * t;
    let d = p - proj;
    (d.dot(d), t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn above_ignores_line_direction() {
        let a = v(0.0, 0.0);
        let b = v(10.0, 2.0);
        assert!(is_above_line(v(5.0, -3.0), a, b));
        assert!(is_above_line(v(5.0, -3.0), b, a));
        assert!(!is_above_line(v(5.0, 8.0), a, b));
        assert!(!is_above_line(v(5.0, 8.0), b, a));
        // on the line
        assert!(!is_above_line(v(5.0, 1.0), a, b));
    }

    #[test]
    fn right_side_ignores_line_direction() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 10.0);
        assert!(is_on_right_side_of_line(v(6.0, 5.0), a, b));
        assert!(is_on_right_side_of_line(v(6.0, 5.0), b, a));
        assert!(!is_on_right_side_of_line(v(-4.0, 5.0), a, b));
        assert!(!is_on_right_side_of_line(v(-4.0, 5.0), b, a));
    }

    #[test]
    fn polygon_containment() {
        let square = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        assert!(point_in_polygon(v(5.0, 5.0), &square));
        assert!(!point_in_polygon(v(15.0, 5.0), &square));
        assert!(!point_in_polygon(v(5.0, 5.0), &square[..2]));
    }

    #[test]
    fn segment_distance_clamps() {
        let (d2, t) = seg_distance_sq(v(-3.0, 4.0), v(0.0, 0.0), v(10.0, 0.0));
        assert!((d2 - 25.0).abs() < 1e-5);
        assert_eq!(t, 0.0);
        let (d2, t) = seg_distance_sq(v(5.0, 2.0), v(0.0, 0.0), v(10.0, 0.0));
        assert!((d2 - 4.0).abs() < 1e-5);
        assert!((t - 0.5).abs() < 1e-6);
    }
}
