// Segment-segment intersection solved in f64.
// Parallel and collinear segments report no intersection.

use super::tolerance::{EPS_DENOM, EPS_PARAM};
use crate::model::Vec2;

#[inline]
fn within_unit(t: f64) -> bool { t >= -EPS_PARAM && t <= 1.0 + EPS_PARAM }

/// Intersection point of segments `a1a2` and `b1b2`, if they cross or touch.
pub fn lines_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let (ax, ay) = (a1.x as f64, a1.y as f64);
    let (bx, by) = (a2.x as f64, a2.y as f64);
    let (cx, cy) = (b1.x as f64, b1.y as f64);
    let (dx, dy) = (b2.x as f64, b2.y as f64);

    let r_x = bx - ax; let r_y = by - ay;
    let s_x = dx - cx; let s_y = dy - cy;
    let rxs = r_x * s_y - r_y * s_x;
    if rxs.abs() <= EPS_DENOM {
        return None;
    }
    let q_p_x = cx - ax; let q_p_y = cy - ay;
    let t = (q_p_x * s_y - q_p_y * s_x) / rxs;
    let u = (q_p_x * r_y - q_p_y * r_x) / rxs;
    if !(within_unit(t) && within_unit(u)) {
        return None;
    }
    // Average both parametrisations so swapping the segments yields the same point.
    let x = 0.5 * ((ax + t * r_x) + (cx + u * s_x));
    let y = 0.5 * ((ay + t * r_y) + (cy + u * s_y));
    Some(Vec2 { x: x as f32, y: y as f32 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn proper_cross() {
        let p = lines_intersection(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0)).expect("cross");
        assert!((p.x - 1.0).abs() < 1e-6 && (p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn endpoint_touch_counts() {
        let p = lines_intersection(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)).expect("touch");
        assert!((p.x - 1.0).abs() < 1e-6 && p.y.abs() < 1e-6);
    }

    #[test]
    fn parallel_and_collinear_are_none() {
        assert!(lines_intersection(v(0.0, 0.0), v(3.0, 0.0), v(0.0, 1.0), v(3.0, 1.0)).is_none());
        assert!(lines_intersection(v(0.0, 0.0), v(3.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)).is_none());
    }

    #[test]
    fn out_of_range_is_none() {
        // lines cross at (5,5), outside the first segment
        assert!(lines_intersection(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 10.0), v(10.0, 0.0)).is_none());
    }

    #[test]
    fn symmetric_under_swaps() {
        let (a1, a2, b1, b2) = (v(-3.0, 1.5), v(7.0, 4.0), v(2.0, -6.0), v(1.0, 9.0));
        let p = lines_intersection(a1, a2, b1, b2).expect("cross");
        for q in [
            lines_intersection(b1, b2, a1, a2),
            lines_intersection(a2, a1, b1, b2),
            lines_intersection(a1, a2, b2, b1),
            lines_intersection(b2, b1, a2, a1),
        ] {
            let q = q.expect("swapped cross");
            assert!((p.x - q.x).abs() < 1e-4 && (p.y - q.y).abs() < 1e-4, "{:?} vs {:?}", p, q);
        }
    }
}
