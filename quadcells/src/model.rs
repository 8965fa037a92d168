use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::geometry::tolerance::EPS_LEN;

/// 2D vector in screen coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn scale(self, factor: f32) -> Vec2 {
        Vec2 { x: self.x * factor, y: self.y * factor }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len > EPS_LEN { self.scale(1.0 / len) } else { Vec2::ZERO }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2 { x: 0.5 * (self.x + other.x), y: 0.5 * (self.y + other.y) }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

/// Component-wise product.
impl Mul for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 { Vec2 { x: self.x * rhs.x, y: self.y * rhs.y } }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 { self.scale(rhs) }
}

/// Component-wise quotient. Division by a zero component follows IEEE rules.
impl Div for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: Vec2) -> Vec2 { Vec2 { x: self.x / rhs.x, y: self.y / rhs.y } }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 { Vec2 { x: -self.x, y: -self.y } }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Rect> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut r = Rect { min: first, max: first };
        for p in it {
            r.min.x = r.min.x.min(p.x);
            r.min.y = r.min.y.min(p.y);
            r.max.x = r.max.x.max(p.x);
            r.max.y = r.max.y.max(p.y);
        }
        Some(r)
    }
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
    pub fn width(&self) -> f32 { self.max.x - self.min.x }
    pub fn height(&self) -> f32 { self.max.y - self.min.y }
    pub fn center(&self) -> Vec2 { self.min.midpoint(self.max) }
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x
            && self.min.y <= other.max.y && other.min.y <= self.max.y
    }
}

/// The four fixed corner roles of a cell. Discriminants are the stable corner indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Corner {
    LeftTop = 0,
    LeftBottom = 1,
    RightTop = 2,
    RightBottom = 3,
}

impl Corner {
    /// Index order.
    pub const ALL: [Corner; 4] = [Corner::LeftTop, Corner::LeftBottom, Corner::RightTop, Corner::RightBottom];

    /// Traversal order of the closed path (clockwise on screen).
    pub const PATH_ORDER: [Corner; 4] = [Corner::LeftTop, Corner::RightTop, Corner::RightBottom, Corner::LeftBottom];

    pub fn from_index(index: usize) -> Option<Corner> {
        Corner::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize { self as usize }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Corner::LeftTop | Corner::LeftBottom)
    }

    #[inline]
    pub fn is_top_connectable_point(self) -> bool {
        matches!(self, Corner::LeftTop | Corner::RightTop)
    }

    /// Corner on another cell this one may pair with: left corners pair with right ones.
    pub fn connectable_point_to_point(self) -> Corner {
        match self {
            Corner::LeftTop => Corner::RightTop,
            Corner::LeftBottom => Corner::RightBottom,
            Corner::RightTop => Corner::LeftTop,
            Corner::RightBottom => Corner::LeftBottom,
        }
    }

    /// Vertically mirrored corner.
    pub fn opposite_side_point(self) -> Corner {
        match self {
            Corner::LeftTop => Corner::LeftBottom,
            Corner::LeftBottom => Corner::LeftTop,
            Corner::RightTop => Corner::RightBottom,
            Corner::RightBottom => Corner::RightTop,
        }
    }

    /// Corner sharing this one's vertical edge. Once `self` is linked to a peer,
    /// this corner may only link to that same peer.
    pub fn not_connectable_neighbour(self) -> Corner {
        self.opposite_side_point()
    }

    /// Position in `PATH_ORDER`.
    pub fn path_position(self) -> usize {
        match self {
            Corner::LeftTop => 0,
            Corner::RightTop => 1,
            Corner::RightBottom => 2,
            Corner::LeftBottom => 3,
        }
    }

    /// (previous, next) corners along the closed path.
    pub fn path_neighbours(self) -> (Corner, Corner) {
        let k = self.path_position();
        (Corner::PATH_ORDER[(k + 3) % 4], Corner::PATH_ORDER[(k + 1) % 4])
    }
}

/// Handle to a cell owned by a `CellsManager`. Slots are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

/// Non-owning back-reference from a corner to the corner it is linked with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerRef {
    pub cell: CellId,
    pub corner: Corner,
}

/// A cell corner: position plus tangent handles stored relative to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Vec2,
    pub prev_control: Vec2,
    pub next_control: Vec2,
    pub peer: Option<PeerRef>,
}

impl Point {
    pub fn new(position: Vec2) -> Self {
        Self { position, prev_control: Vec2::ZERO, next_control: Vec2::ZERO, peer: None }
    }

    #[inline]
    pub fn is_connected(&self) -> bool { self.peer.is_some() }

    pub fn position_relative_to(&self, origin: Vec2) -> Vec2 {
        self.position - origin
    }
    pub fn prev_control_point_relative_to(&self, origin: Vec2) -> Vec2 {
        self.position + self.prev_control - origin
    }
    pub fn next_control_point_relative_to(&self, origin: Vec2) -> Vec2 {
        self.position + self.next_control - origin
    }
}
