//! A smooth quadrilateral: four corners joined by one cubic element per side.

use serde::{Deserialize, Serialize};

use crate::error::{CellsError, Result};
use crate::geometry::cubic::{BezierPath, CubicBezier};
use crate::geometry::flatten::first_curve_intersection;
use crate::geometry::limits::in_coord_bounds;
use crate::model::{CellId, Corner, PeerRef, Point, Rect, Vec2};
use crate::shapes::ShapeTemplate;

/// Handle length as a fraction of the distance to the neighbouring corner.
pub const CONTROL_VECTOR_RATIO: f32 = 0.3;

/// Number of raw values in `geometry_data`: position and two handles per corner.
pub const GEOMETRY_DATA_LEN: usize = 12;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    udid: String,
    pub name: String,
    pub tag: i32,
    shape: ShapeTemplate,
    points: [Point; 4],
}

impl Cell {
    /// New cell stamped from the default template around `p`.
    pub fn at_point(p: Vec2) -> Self {
        Self::with_shape(ShapeTemplate::default(), p)
    }

    pub fn with_shape(shape: ShapeTemplate, p: Vec2) -> Self {
        let mut cell = Cell {
            udid: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            tag: 0,
            shape,
            points: [Point::new(p); 4],
        };
        cell.initialise_shape(shape, p);
        cell
    }

    /// Re-stamp the corners from `shape` around `around`. Peer links are left as they are.
    pub fn initialise_shape(&mut self, shape: ShapeTemplate, around: Vec2) {
        self.shape = shape;
        for (c, offset) in Corner::ALL.into_iter().zip(shape.corner_offsets()) {
            self.points[c.index()].position = around + offset;
        }
        self.update_bezier_control_vectors();
    }

    pub fn udid(&self) -> &str { &self.udid }
    pub fn shape(&self) -> ShapeTemplate { self.shape }
    pub fn points(&self) -> &[Point; 4] { &self.points }
    pub fn point(&self, corner: Corner) -> &Point { &self.points[corner.index()] }
    pub fn position(&self, corner: Corner) -> Vec2 { self.points[corner.index()].position }

    pub(crate) fn set_peer(&mut self, corner: Corner, peer: Option<PeerRef>) {
        self.points[corner.index()].peer = peer;
    }

    // Geometry snapshot

    /// Position, previous handle and next handle of every corner, in corner index order.
    pub fn geometry_data(&self) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(GEOMETRY_DATA_LEN);
        for p in &self.points {
            out.push(p.position);
            out.push(p.prev_control);
            out.push(p.next_control);
        }
        out
    }

    pub fn set_geometry_data(&mut self, geometry: &[Vec2]) -> Result<()> {
        if geometry.len() != GEOMETRY_DATA_LEN {
            return Err(CellsError::InvalidGeometryData(format!(
                "expected {} values, got {}",
                GEOMETRY_DATA_LEN,
                geometry.len()
            )));
        }
        if let Some(bad) = geometry.iter().find(|v| !in_coord_bounds(v.x) || !in_coord_bounds(v.y)) {
            return Err(CellsError::InvalidGeometryData(format!("value out of bounds: {:?}", bad)));
        }
        for (p, chunk) in self.points.iter_mut().zip(geometry.chunks_exact(3)) {
            p.position = chunk[0];
            p.prev_control = chunk[1];
            p.next_control = chunk[2];
        }
        Ok(())
    }

    // Curves

    /// Recompute every corner's handles from its path neighbours so the outline is C1.
    pub fn update_bezier_control_vectors(&mut self) {
        let positions = self.points.map(|p| p.position);
        for c in Corner::ALL {
            let (prev, next) = c.path_neighbours();
            let pos = positions[c.index()];
            let prev_pos = positions[prev.index()];
            let next_pos = positions[next.index()];
            let dir = (next_pos - prev_pos).normalize();
            let p = &mut self.points[c.index()];
            p.prev_control = -dir * (pos.distance(prev_pos) * CONTROL_VECTOR_RATIO);
            p.next_control = dir * (next_pos.distance(pos) * CONTROL_VECTOR_RATIO);
        }
    }

    /// Closed outline in absolute coordinates.
    pub fn bezier_path(&self) -> BezierPath {
        Self::bezier_path_from_points(&self.points, Vec2::ZERO, true)
    }

    /// Outline translated so `origin` maps to (0, 0). The open variant omits the
    /// closing `LeftBottom → LeftTop` element.
    pub fn bezier_path_relative_to(&self, origin: Vec2, closed: bool) -> BezierPath {
        Self::bezier_path_from_points(&self.points, origin, closed)
    }

    pub fn bezier_path_from_points(points: &[Point; 4], origin: Vec2, closed: bool) -> BezierPath {
        let count = if closed { 4 } else { 3 };
        let segments = (0..count)
            .map(|k| {
                let a = &points[Corner::PATH_ORDER[k].index()];
                let b = &points[Corner::PATH_ORDER[(k + 1) % 4].index()];
                CubicBezier::new(
                    a.position_relative_to(origin),
                    a.next_control_point_relative_to(origin),
                    b.prev_control_point_relative_to(origin),
                    b.position_relative_to(origin),
                )
            })
            .collect();
        BezierPath { segments, closed }
    }

    /// Path element joining two path-adjacent corners; `None` for diagonals.
    pub fn bezier_segment_index_between(&self, c1: Corner, c2: Corner) -> Option<usize> {
        let (k1, k2) = (c1.path_position(), c2.path_position());
        if (k1 + 1) % 4 == k2 {
            Some(k1)
        } else if (k2 + 1) % 4 == k1 {
            Some(k2)
        } else {
            None
        }
    }

    pub fn intersects_with_cell(&self, other: &Cell, segments_per_element: usize) -> bool {
        first_curve_intersection(&self.bezier_path(), &other.bezier_path(), segments_per_element).is_some()
    }

    // Bounds

    /// Encloses every corner and every absolute handle point.
    pub fn bounding_box(&self) -> Rect {
        let pts = self.points.iter().flat_map(|p| {
            [p.position, p.position + p.prev_control, p.position + p.next_control]
        });
        Rect::from_points(pts).unwrap_or(Rect { min: Vec2::ZERO, max: Vec2::ZERO })
    }

    /// Centroid of the four corners.
    pub fn center_point(&self) -> Vec2 {
        let sum = self.points.iter().fold(Vec2::ZERO, |acc, p| acc + p.position);
        sum * 0.25
    }

    pub fn bounding_box_center(&self) -> Vec2 {
        self.bounding_box().center()
    }

    fn side_corners(left: bool) -> (Corner, Corner) {
        if left { (Corner::LeftTop, Corner::LeftBottom) } else { (Corner::RightTop, Corner::RightBottom) }
    }

    /// Distance between the two corners of the left or right side.
    pub fn side_height(&self, left: bool) -> f32 {
        let (t, b) = Self::side_corners(left);
        self.position(t).distance(self.position(b))
    }

    pub fn side_midpoint(&self, left: bool) -> Vec2 {
        let (t, b) = Self::side_corners(left);
        self.position(t).midpoint(self.position(b))
    }

    /// Mean length of the top and bottom edges.
    pub fn width(&self) -> f32 {
        let top = self.position(Corner::LeftTop).distance(self.position(Corner::RightTop));
        let bottom = self.position(Corner::LeftBottom).distance(self.position(Corner::RightBottom));
        0.5 * (top + bottom)
    }

    // Connectivity

    pub fn has_connections(&self) -> bool {
        self.points.iter().any(Point::is_connected)
    }

    pub fn is_connected_on_left_side(&self) -> bool {
        self.point(Corner::LeftTop).is_connected() || self.point(Corner::LeftBottom).is_connected()
    }

    pub fn is_connected_on_right_side(&self) -> bool {
        self.point(Corner::RightTop).is_connected() || self.point(Corner::RightBottom).is_connected()
    }

    /// At least one side is still completely free.
    pub fn has_available_connections(&self) -> bool {
        !self.is_connected_on_left_side() || !self.is_connected_on_right_side()
    }

    pub fn is_connected_to_cell(&self, other: CellId) -> bool {
        self.points.iter().any(|p| p.peer.map_or(false, |peer| peer.cell == other))
    }

    /// `(own corner, peer)` for every linked corner.
    pub fn connected_peers(&self) -> impl Iterator<Item = (Corner, PeerRef)> + '_ {
        Corner::ALL.into_iter().filter_map(move |c| self.point(c).peer.map(|peer| (c, peer)))
    }

    // Editing

    pub fn set_point_position(&mut self, corner: Corner, position: Vec2) {
        self.points[corner.index()].position = position;
    }

    /// Offset of `corner` from the midpoint of its two path neighbours.
    pub fn relative_to_neighbours_point_position(&self, corner: Corner) -> Vec2 {
        let (prev, next) = corner.path_neighbours();
        self.position(corner) - self.position(prev).midpoint(self.position(next))
    }

    pub fn set_point_position_relative_to_neighbours(&mut self, corner: Corner, offset: Vec2) {
        let (prev, next) = corner.path_neighbours();
        let anchor = self.position(prev).midpoint(self.position(next));
        self.set_point_position(corner, anchor + offset);
    }

    /// Rigid translation; handle offsets are unchanged.
    pub fn move_by(&mut self, delta: Vec2) {
        for p in self.points.iter_mut() {
            p.position = p.position + delta;
        }
    }
}
