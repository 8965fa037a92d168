use serde::{Deserialize, Serialize};

use crate::model::{Corner, Vec2};

/// Built-in base quadrilaterals a new cell is stamped from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTemplate {
    #[default]
    Rectangle = 0,
    Square = 1,
    Trapezoid = 2,
    Parallelogram = 3,
    Wedge = 4,
}

impl ShapeTemplate {
    pub const ALL: [ShapeTemplate; 5] = [
        ShapeTemplate::Rectangle,
        ShapeTemplate::Square,
        ShapeTemplate::Trapezoid,
        ShapeTemplate::Parallelogram,
        ShapeTemplate::Wedge,
    ];

    /// Any index selects a template; out-of-range values wrap around the catalog.
    pub fn from_index(index: usize) -> ShapeTemplate {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Corner offsets from the seed point, in `Corner` index order.
    pub fn corner_offsets(self) -> [Vec2; 4] {
        let (lt, lb, rt, rb) = match self {
            ShapeTemplate::Rectangle => ((-50.0, -40.0), (-50.0, 40.0), (50.0, -40.0), (50.0, 40.0)),
            ShapeTemplate::Square => ((-40.0, -40.0), (-40.0, 40.0), (40.0, -40.0), (40.0, 40.0)),
            ShapeTemplate::Trapezoid => ((-35.0, -40.0), (-50.0, 40.0), (35.0, -40.0), (50.0, 40.0)),
            ShapeTemplate::Parallelogram => ((-40.0, -40.0), (-60.0, 40.0), (60.0, -40.0), (40.0, 40.0)),
            ShapeTemplate::Wedge => ((-50.0, -30.0), (-50.0, 30.0), (50.0, -45.0), (50.0, 45.0)),
        };
        let mut out = [Vec2::ZERO; 4];
        for (c, (x, y)) in Corner::ALL.into_iter().zip([lt, lb, rt, rb]) {
            out[c.index()] = Vec2::new(x, y);
        }
        out
    }
}
