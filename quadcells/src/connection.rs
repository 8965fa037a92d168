use serde::{Deserialize, Serialize};

use crate::model::{CellId, Corner, PeerRef};

/// A realized or candidate link between two cells: a top corner pair and a bottom corner pair.
///
/// Distances are only meaningful on candidates, where they rank competing pairings;
/// infos read back from realized links carry zeros.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub cell_from: CellId,
    pub cell_to: CellId,
    pub from_top: Corner,
    pub to_top: Corner,
    pub from_bottom: Corner,
    pub to_bottom: Corner,
    pub distance_top: f32,
    pub distance_bottom: f32,
}

impl ConnectionInfo {
    pub fn new(
        cell_from: CellId,
        cell_to: CellId,
        from_top: Corner,
        to_top: Corner,
        from_bottom: Corner,
        to_bottom: Corner,
    ) -> Self {
        Self {
            cell_from,
            cell_to,
            from_top,
            to_top,
            from_bottom,
            to_bottom,
            distance_top: 0.0,
            distance_bottom: 0.0,
        }
    }

    /// Canonical left-to-right link: `from`'s right side onto `to`'s left side.
    pub fn left_to_right(from: CellId, to: CellId) -> Self {
        Self::new(from, to, Corner::RightTop, Corner::LeftTop, Corner::RightBottom, Corner::LeftBottom)
    }

    pub fn with_distances(mut self, top: f32, bottom: f32) -> Self {
        self.distance_top = top;
        self.distance_bottom = bottom;
        self
    }

    pub fn combined_distance(&self) -> f32 {
        self.distance_top + self.distance_bottom
    }

    /// The cell both infos share, if any.
    pub fn common_cell_with(&self, other: &ConnectionInfo) -> Option<CellId> {
        [self.cell_from, self.cell_to]
            .into_iter()
            .find(|c| *c == other.cell_from || *c == other.cell_to)
    }

    /// Swap the roles of the two cells.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.cell_from, &mut self.cell_to);
        std::mem::swap(&mut self.from_top, &mut self.to_top);
        std::mem::swap(&mut self.from_bottom, &mut self.to_bottom);
    }

    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// True when `cell_from` links with its left side, i.e. it is the right-hand cell.
    pub fn is_from_right_to_left(&self) -> bool {
        self.from_top.is_left()
    }

    /// Same link with `cell_from` as the left-hand cell.
    pub fn canonical(self) -> Self {
        if self.is_from_right_to_left() { self.inverted() } else { self }
    }

    /// Every corner the link touches: from-top, to-top, from-bottom, to-bottom.
    pub fn affected_points(&self) -> [PeerRef; 4] {
        [
            PeerRef { cell: self.cell_from, corner: self.from_top },
            PeerRef { cell: self.cell_to, corner: self.to_top },
            PeerRef { cell: self.cell_from, corner: self.from_bottom },
            PeerRef { cell: self.cell_to, corner: self.to_bottom },
        ]
    }

    /// (from, to) corner pairs, top first.
    pub fn corner_pairs(&self) -> [(PeerRef, PeerRef); 2] {
        let [ft, tt, fb, tb] = self.affected_points();
        [(ft, tt), (fb, tb)]
    }

    /// True when both pairs join a right side to a left side, top with top and bottom
    /// with bottom, on two different cells.
    pub fn is_well_formed(&self) -> bool {
        let c = self.canonical();
        c.cell_from != c.cell_to
            && (c.from_top, c.to_top, c.from_bottom, c.to_bottom)
                == (Corner::RightTop, Corner::LeftTop, Corner::RightBottom, Corner::LeftBottom)
    }

    /// Same cells and corners once both sides are canonical. Distances are ignored.
    pub fn same_pairing(&self, other: &ConnectionInfo) -> bool {
        let (a, b) = (self.canonical(), other.canonical());
        (a.cell_from, a.cell_to, a.from_top, a.to_top, a.from_bottom, a.to_bottom)
            == (b.cell_from, b.cell_to, b.from_top, b.to_top, b.from_bottom, b.to_bottom)
    }

    pub fn involves(&self, cell: CellId) -> bool {
        self.cell_from == cell || self.cell_to == cell
    }
}

/// Placing `inserting_cell` between `cell_a` (left) and `cell_b` (right).
///
/// When derived from an existing `cell_a → cell_b` link, `connection_a` is the
/// `cell_a → inserting_cell` link and `connection_b` the `inserting_cell → cell_b`
/// link that replace it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertionInfo {
    pub inserting_cell: CellId,
    pub cell_a: CellId,
    pub cell_b: CellId,
    pub connection_a: Option<ConnectionInfo>,
    pub connection_b: Option<ConnectionInfo>,
}

impl InsertionInfo {
    pub fn new(inserting_cell: CellId, cell_a: CellId, cell_b: CellId) -> Self {
        Self { inserting_cell, cell_a, cell_b, connection_a: None, connection_b: None }
    }

    pub fn with_connections(mut self, connection_a: ConnectionInfo, connection_b: ConnectionInfo) -> Self {
        self.connection_a = Some(connection_a);
        self.connection_b = Some(connection_b);
        self
    }

    pub fn has_connections(&self) -> bool {
        self.connection_a.is_some() && self.connection_b.is_some()
    }
}
