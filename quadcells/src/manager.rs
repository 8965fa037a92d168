//! Cell collection plus the connection graph encoded in corner peer links.
//!
//! Every link joins a right-side corner of one cell with the matching left-side
//! corner of another (`Corner::connectable_point_to_point`). A realized connection
//! is the pair of top and bottom links between two cells.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, warn};

use crate::cell::Cell;
use crate::config::ManagerConfig;
use crate::connection::{ConnectionInfo, InsertionInfo};
use crate::error::{CellsError, Result};
use crate::geometry::flatten::flatten_curve;
use crate::geometry::math::{is_above_line, is_on_right_side_of_line, point_in_polygon, seg_distance_sq};
use crate::model::{CellId, Corner, PeerRef, Point, Vec2};

#[derive(Default)]
pub struct CellsManager {
    pub(crate) cells: Vec<Option<Cell>>, // id is index
    config: ManagerConfig,
}

impl CellsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ManagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { cells: Vec::new(), config })
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ManagerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // Collection

    /// Takes ownership of `cell`. Any peer links it carries are dropped.
    pub fn add_cell(&mut self, mut cell: Cell) -> CellId {
        for c in Corner::ALL {
            cell.set_peer(c, None);
        }
        let id = CellId(self.cells.len() as u32);
        self.cells.push(Some(cell));
        id
    }

    /// Severs every link of the cell, then hands it back.
    pub fn remove_cell(&mut self, id: CellId) -> Result<Cell> {
        if self.cell(id).is_none() {
            return Err(CellsError::UnknownCell(id));
        }
        self.disconnect_cell(id);
        let cell = self
            .cells
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .ok_or(CellsError::UnknownCell(id))?;
        debug!("removed cell {:?} ({})", id, cell.udid());
        Ok(cell)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0 as usize).and_then(|c| c.as_ref())
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.0 as usize).and_then(|c| c.as_mut())
    }

    fn cell_or_err(&self, id: CellId) -> Result<&Cell> {
        self.cell(id).ok_or(CellsError::UnknownCell(id))
    }

    fn cell_mut_or_err(&mut self, id: CellId) -> Result<&mut Cell> {
        self.cell_mut(id).ok_or(CellsError::UnknownCell(id))
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (CellId(i as u32), c)))
    }

    pub fn cell_ids(&self) -> Vec<CellId> {
        self.cells().map(|(id, _)| id).collect()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The point a peer link targets, if the handle is still live.
    pub fn resolve_peer(&self, peer: PeerRef) -> Option<&Point> {
        self.cell(peer.cell).map(|c| c.point(peer.corner))
    }

    fn peer_of(&self, at: PeerRef) -> Option<PeerRef> {
        self.resolve_peer(at).and_then(|p| p.peer)
    }

    fn set_link(&mut self, a: PeerRef, b: PeerRef) {
        if let Some(cell) = self.cell_mut(a.cell) {
            cell.set_peer(a.corner, Some(b));
        }
        if let Some(cell) = self.cell_mut(b.cell) {
            cell.set_peer(b.corner, Some(a));
        }
    }

    fn clear_link(&mut self, at: PeerRef) -> bool {
        let Some(peer) = self.peer_of(at) else { return false; };
        if let Some(cell) = self.cell_mut(at.cell) {
            cell.set_peer(at.corner, None);
        }
        if self.peer_of(peer) == Some(at) {
            if let Some(cell) = self.cell_mut(peer.cell) {
                cell.set_peer(peer.corner, None);
            }
        }
        true
    }

    // Realized connections

    /// Realized connection between two cells, canonical (left cell first).
    /// Partially linked pairs report `None`.
    pub fn connection_between(&self, a: CellId, b: CellId) -> Option<ConnectionInfo> {
        let linked = |info: ConnectionInfo| {
            info.corner_pairs().iter().all(|(f, t)| self.peer_of(*f) == Some(*t))
        };
        let forward = ConnectionInfo::left_to_right(a, b);
        let backward = ConnectionInfo::left_to_right(b, a);
        if a == b {
            None
        } else if linked(forward) {
            Some(forward)
        } else if linked(backward) {
            Some(backward)
        } else {
            None
        }
    }

    /// All realized connections, ordered by left cell.
    pub fn connections(&self) -> Vec<ConnectionInfo> {
        self.cells()
            .filter_map(|(id, c)| {
                let peer = c.point(Corner::RightTop).peer?;
                self.connection_between(id, peer.cell).filter(|info| info.cell_from == id)
            })
            .collect()
    }

    // Discovery

    /// Every pairing of not-yet-connected cells whose facing corners are within
    /// `connection_detection_distance`. Candidates are canonical (left cell first).
    pub fn get_available_connections(&self) -> Vec<ConnectionInfo> {
        let ids = self.cell_ids();
        let mut out = Vec::new();
        for (i, &p) in ids.iter().enumerate() {
            for &q in &ids[i + 1..] {
                let (Some(cp), Some(cq)) = (self.cell(p), self.cell(q)) else { continue; };
                if cp.is_connected_to_cell(q) {
                    continue;
                }
                let best = match (self.connection_candidate(p, cp, q, cq), self.connection_candidate(q, cq, p, cp)) {
                    (Some(fwd), Some(back)) => {
                        if back.combined_distance() < fwd.combined_distance() { Some(back) } else { Some(fwd) }
                    }
                    (fwd, back) => fwd.or(back),
                };
                out.extend(best);
            }
        }
        out.sort_by_key(|c| (c.cell_from, c.cell_to));
        out
    }

    fn connection_candidate(&self, left_id: CellId, left: &Cell, right_id: CellId, right: &Cell) -> Option<ConnectionInfo> {
        let info = ConnectionInfo::left_to_right(left_id, right_id);
        let free = |pr: &PeerRef| {
            let cell = if pr.cell == left_id { left } else { right };
            !cell.point(pr.corner).is_connected()
        };
        if !info.affected_points().iter().all(free) {
            return None;
        }
        let distance_top = left.position(info.from_top).distance(right.position(info.to_top));
        let distance_bottom = left.position(info.from_bottom).distance(right.position(info.to_bottom));
        let max = self.config.connection_detection_distance;
        if distance_top > max || distance_bottom > max {
            return None;
        }
        if !is_on_right_side_of_line(right.center_point(), left.position(Corner::RightTop), left.position(Corner::RightBottom)) {
            return None;
        }
        // untwisted: the joined top corners stay above both bottom edges
        let top_mid = left.position(info.from_top).midpoint(right.position(info.to_top));
        if !is_above_line(top_mid, left.position(Corner::LeftBottom), left.position(Corner::RightBottom))
            || !is_above_line(top_mid, right.position(Corner::LeftBottom), right.position(Corner::RightBottom))
        {
            return None;
        }
        Some(info.with_distances(distance_top, distance_bottom))
    }

    fn insertion_gap_ok(&self, left: &Cell, right: &Cell) -> bool {
        let gap = left.side_height(false).min(right.side_height(true));
        gap >= self.config.min_insertion_distance
    }

    /// Insertion candidates: free cells overlapping both cells of a realized connection
    /// (carrying the replacement connections), and free cells overlapping two facing,
    /// unconnected cells (without connections).
    pub fn get_available_insertions(&self) -> Vec<InsertionInfo> {
        let segments = self.config.segments_per_element;
        let mut memo: HashMap<(CellId, CellId), bool> = HashMap::new();
        let mut overlaps = |a: CellId, ca: &Cell, b: CellId, cb: &Cell| -> bool {
            let key = if a <= b { (a, b) } else { (b, a) };
            *memo.entry(key).or_insert_with(|| ca.intersects_with_cell(cb, segments))
        };

        let free: Vec<(CellId, &Cell)> = self.cells().filter(|(_, c)| !c.has_connections()).collect();
        let mut out = Vec::new();

        for conn in self.connections() {
            let (a, b) = (conn.cell_from, conn.cell_to);
            let (Some(ca), Some(cb)) = (self.cell(a), self.cell(b)) else { continue; };
            if !self.insertion_gap_ok(ca, cb) {
                continue;
            }
            for &(c, cc) in &free {
                if overlaps(c, cc, a, ca) && overlaps(c, cc, b, cb) {
                    out.push(InsertionInfo::new(c, a, b).with_connections(
                        ConnectionInfo::left_to_right(a, c),
                        ConnectionInfo::left_to_right(c, b),
                    ));
                }
            }
        }

        for (a, ca) in self.cells() {
            if ca.is_connected_on_right_side() {
                continue;
            }
            for (b, cb) in self.cells() {
                if a == b || cb.is_connected_on_left_side() || ca.is_connected_to_cell(b) {
                    continue;
                }
                if ca.center_point().x >= cb.center_point().x || !self.insertion_gap_ok(ca, cb) {
                    continue;
                }
                for &(c, cc) in &free {
                    if c == a || c == b {
                        continue;
                    }
                    if overlaps(c, cc, a, ca) && overlaps(c, cc, b, cb) {
                        out.push(InsertionInfo::new(c, a, b));
                    }
                }
            }
        }
        out
    }

    // Mutation

    /// Join the corner pairs of `info`. Each pair meets at its midpoint; the cells'
    /// remaining free corners keep their offsets relative to their neighbours.
    pub fn connect_cells(&mut self, info: &ConnectionInfo) -> Result<()> {
        let info = info.canonical();
        let (a, b) = (info.cell_from, info.cell_to);
        if a == b {
            return Err(CellsError::SelfConnection(a));
        }
        if !info.is_well_formed() {
            warn!("connect rejected: {:?} is not a right-to-left pairing", info);
            return Err(CellsError::IllegalPairing { from: a, to: b });
        }
        let (ca, cb) = (self.cell_or_err(a)?, self.cell_or_err(b)?);
        for pr in info.affected_points() {
            let cell = if pr.cell == a { ca } else { cb };
            if cell.point(pr.corner).is_connected() {
                warn!("connect rejected: {:?} {:?} already linked", pr.cell, pr.corner);
                return Err(CellsError::CornerAlreadyConnected { cell: pr.cell, corner: pr.corner });
            }
        }

        let mut joins: Vec<(CellId, Corner, Vec2)> = Vec::with_capacity(4);
        for (f, t) in info.corner_pairs() {
            let target = ca.position(f.corner).midpoint(cb.position(t.corner));
            joins.push((f.cell, f.corner, target));
            joins.push((t.cell, t.corner, target));
        }
        for id in [a, b] {
            let moves: Vec<(Corner, Vec2)> =
                joins.iter().filter(|(c, _, _)| *c == id).map(|(_, corner, p)| (*corner, *p)).collect();
            Self::snap_corners(self.cell_mut_or_err(id)?, &moves);
        }
        for (f, t) in info.corner_pairs() {
            self.set_link(f, t);
        }
        debug!("connected {:?} -> {:?} (d_top={}, d_bottom={})", a, b, info.distance_top, info.distance_bottom);
        Ok(())
    }

    fn snap_corners(cell: &mut Cell, moves: &[(Corner, Vec2)]) {
        let free: Vec<(Corner, Vec2)> = Corner::PATH_ORDER
            .into_iter()
            .filter(|c| !cell.point(*c).is_connected() && !moves.iter().any(|(m, _)| m == c))
            .map(|c| (c, cell.relative_to_neighbours_point_position(c)))
            .collect();
        for (corner, p) in moves {
            cell.set_point_position(*corner, *p);
        }
        for (corner, offset) in free {
            cell.set_point_position_relative_to_neighbours(corner, offset);
        }
        cell.update_bezier_control_vectors();
    }

    /// Sever every link between two cells.
    pub fn disconnect_cells(&mut self, a: CellId, b: CellId) -> Result<usize> {
        let ca = self.cell_or_err(a)?;
        self.cell_or_err(b)?;
        let linked: Vec<Corner> = ca.connected_peers().filter(|(_, p)| p.cell == b).map(|(c, _)| c).collect();
        if linked.is_empty() {
            return Err(CellsError::NotConnected { a, b });
        }
        for corner in &linked {
            self.clear_link(PeerRef { cell: a, corner: *corner });
        }
        debug!("disconnected {:?} from {:?} ({} links)", a, b, linked.len());
        Ok(linked.len())
    }

    /// Sever every link of `id`, on both sides. Returns the number of links cut.
    pub fn disconnect_cell(&mut self, id: CellId) -> usize {
        let Some(cell) = self.cell(id) else { return 0; };
        let linked: Vec<Corner> = cell.connected_peers().map(|(c, _)| c).collect();
        let mut severed = 0;
        for corner in linked {
            if self.clear_link(PeerRef { cell: id, corner }) {
                severed += 1;
            }
        }
        // links whose back-reference was already gone
        for slot in self.cells.iter_mut().flatten() {
            for c in Corner::ALL {
                if slot.point(c).peer.map_or(false, |p| p.cell == id) {
                    slot.set_peer(c, None);
                }
            }
        }
        if severed > 0 {
            debug!("disconnected cell {:?} ({} links)", id, severed);
        }
        severed
    }

    /// Sever links of `id` whose corners drifted further apart than `connection_distance`.
    /// Callers run this after drags; it is never invoked implicitly.
    pub fn update_cell_connections(&mut self, id: CellId) -> usize {
        let Some(cell) = self.cell(id) else { return 0; };
        let max = self.config.connection_distance;
        let stretched: Vec<Corner> = cell
            .connected_peers()
            .filter(|(c, peer)| match self.resolve_peer(*peer) {
                Some(p) => cell.position(*c).distance(p.position) > max,
                None => true,
            })
            .map(|(c, _)| c)
            .collect();
        for corner in &stretched {
            self.clear_link(PeerRef { cell: id, corner: *corner });
        }
        if !stretched.is_empty() {
            debug!("severed {} stretched links of {:?}", stretched.len(), id);
        }
        stretched.len()
    }

    pub fn update_all_connections(&mut self) -> usize {
        self.cell_ids().into_iter().map(|id| self.update_cell_connections(id)).sum()
    }

    /// Place `inserting_cell` between `cell_a` and `cell_b` and link it to both.
    /// Cells chained to the right of `cell_b` shift so the inserted cell keeps its width.
    pub fn insert_cell(&mut self, info: &InsertionInfo) -> Result<()> {
        let (c, a, b) = (info.inserting_cell, info.cell_a, info.cell_b);
        if c == a || c == b || a == b {
            return Err(CellsError::StaleInsertion { inserting: c, reason: "cells must be distinct" });
        }
        let link_a = ConnectionInfo::left_to_right(a, c);
        let link_b = ConnectionInfo::left_to_right(c, b);
        let carried = [(info.connection_a, link_a), (info.connection_b, link_b)];
        if info.connection_a.is_some() != info.connection_b.is_some()
            || carried.iter().any(|(given, derived)| given.map_or(false, |g| !g.same_pairing(derived)))
        {
            warn!("insert rejected: carried connections do not match {:?} between {:?} and {:?}", c, a, b);
            return Err(CellsError::StaleInsertion { inserting: c, reason: "connections do not match the cells" });
        }
        let cc = self.cell_or_err(c)?;
        self.cell_or_err(a)?;
        self.cell_or_err(b)?;
        if let Some((corner, _)) = cc.connected_peers().next() {
            return Err(CellsError::CornerAlreadyConnected { cell: c, corner });
        }

        if info.has_connections() {
            if self.connection_between(a, b) != Some(ConnectionInfo::left_to_right(a, b)) {
                warn!("insert rejected: {:?} and {:?} are no longer connected", a, b);
                return Err(CellsError::StaleInsertion { inserting: c, reason: "cells are no longer connected" });
            }
        } else {
            for pr in ConnectionInfo::left_to_right(a, b).affected_points() {
                if self.resolve_peer(pr).map_or(false, Point::is_connected) {
                    return Err(CellsError::CornerAlreadyConnected { cell: pr.cell, corner: pr.corner });
                }
            }
        }

        // every rejection happens above; nothing below fails for live, validated cells
        let chain = self.chain_to_the_right(b);
        if info.has_connections() {
            self.disconnect_cells(a, b)?;
        }

        let width = self.cell_or_err(c)?.width();
        let ca = self.cell_or_err(a)?;
        let target = ca.side_midpoint(false) + Vec2::new(width, 0.0);
        let offset = target - self.cell_or_err(b)?.side_midpoint(true);
        if chain.contains(&a) {
            warn!("insert: {:?} is chained back to {:?}, not shifting", b, a);
        } else {
            for id in &chain {
                self.cell_mut_or_err(*id)?.move_by(offset);
            }
        }

        let ca = self.cell_or_err(a)?;
        let cb = self.cell_or_err(b)?;
        let corners = [
            (Corner::LeftTop, ca.position(Corner::RightTop)),
            (Corner::LeftBottom, ca.position(Corner::RightBottom)),
            (Corner::RightTop, cb.position(Corner::LeftTop)),
            (Corner::RightBottom, cb.position(Corner::LeftBottom)),
        ];
        let inserting = self.cell_mut_or_err(c)?;
        for (corner, p) in corners {
            inserting.set_point_position(corner, p);
        }
        inserting.update_bezier_control_vectors();

        self.connect_cells(&link_a)?;
        self.connect_cells(&link_b)?;
        debug!("inserted {:?} between {:?} and {:?} (shifted {} cells)", c, a, b, chain.len());
        Ok(())
    }

    /// `start` plus every cell reachable through right-side links.
    fn chain_to_the_right(&self, start: CellId) -> Vec<CellId> {
        let mut seen = HashSet::from([start]);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let Some(cell) = self.cell(id) else { continue; };
            for (corner, peer) in cell.connected_peers() {
                if !corner.is_left() && self.cell(peer.cell).is_some() && seen.insert(peer.cell) {
                    order.push(peer.cell);
                    queue.push_back(peer.cell);
                }
            }
        }
        order
    }

    // Editing

    /// Translate a cell. Links are kept; run `update_cell_connections` to prune stretched ones.
    pub fn move_cell_by(&mut self, id: CellId, delta: Vec2) -> Result<()> {
        let cell = self.cell_mut_or_err(id)?;
        cell.move_by(delta);
        cell.update_bezier_control_vectors();
        Ok(())
    }

    /// Drag a single corner; a linked peer corner follows.
    pub fn set_corner_position(&mut self, id: CellId, corner: Corner, position: Vec2) -> Result<()> {
        let cell = self.cell_mut_or_err(id)?;
        cell.set_point_position(corner, position);
        cell.update_bezier_control_vectors();
        let peer = cell.point(corner).peer;
        if let Some(peer) = peer {
            if let Some(other) = self.cell_mut(peer.cell) {
                other.set_point_position(peer.corner, position);
                other.update_bezier_control_vectors();
            }
        }
        Ok(())
    }

    // Picking

    /// Nearest corner within `tolerance` of `p`.
    pub fn pick_corner(&self, p: Vec2, tolerance: f32) -> Option<PeerRef> {
        let mut best: Option<(f32, PeerRef)> = None;
        for (id, cell) in self.cells() {
            for corner in Corner::ALL {
                let d = cell.position(corner).distance(p);
                if d <= tolerance && best.map_or(true, |(bd, _)| d < bd) {
                    best = Some((d, PeerRef { cell: id, corner }));
                }
            }
        }
        best.map(|(_, r)| r)
    }

    /// Most recently added cell whose outline contains `p` or passes within `tolerance`.
    pub fn pick_cell(&self, p: Vec2, tolerance: f32) -> Option<CellId> {
        let tol2 = tolerance * tolerance;
        let segments = self.config.segments_per_element;
        self.cells()
            .filter(|(_, c)| {
                let bb = c.bounding_box();
                p.x >= bb.min.x - tolerance
                    && p.x <= bb.max.x + tolerance
                    && p.y >= bb.min.y - tolerance
                    && p.y <= bb.max.y + tolerance
            })
            .filter(|(_, c)| {
                let outline = flatten_curve(&c.bezier_path(), segments);
                point_in_polygon(p, &outline)
                    || outline.windows(2).any(|w| seg_distance_sq(p, w[0], w[1]).0 <= tol2)
            })
            .map(|(id, _)| id)
            .last()
    }

    /// Verify link symmetry, live handles, legal corner pairing and single peer per vertical edge.
    pub fn check_invariants(&self) -> Result<()> {
        for (id, cell) in self.cells() {
            for (corner, peer) in cell.connected_peers() {
                let here = PeerRef { cell: id, corner };
                let Some(target) = self.resolve_peer(peer) else {
                    return Err(CellsError::Corrupted(format!("{:?} points at missing {:?}", here, peer)));
                };
                if target.peer != Some(here) {
                    return Err(CellsError::Corrupted(format!("{:?} -> {:?} is not mutual", here, peer)));
                }
                if peer.cell == id || peer.corner != corner.connectable_point_to_point() {
                    return Err(CellsError::Corrupted(format!("illegal pairing {:?} -> {:?}", here, peer)));
                }
                if let Some(other) = cell.point(corner.not_connectable_neighbour()).peer {
                    if other.cell != peer.cell {
                        return Err(CellsError::Corrupted(format!(
                            "{:?} side of {:?} linked to both {:?} and {:?}",
                            if corner.is_left() { "left" } else { "right" },
                            id,
                            peer.cell,
                            other.cell
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn ids_are_not_reused() {
        let mut m = CellsManager::new();
        let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
        m.remove_cell(a).unwrap();
        let b = m.add_cell(Cell::at_point(v(0.0, 0.0)));
        assert_ne!(a, b);
        assert!(m.cell(a).is_none());
        assert_eq!(m.cell_count(), 1);
        assert_eq!(m.remove_cell(a).unwrap_err(), CellsError::UnknownCell(a));
    }

    #[test]
    fn added_cells_lose_foreign_links() {
        let mut other = CellsManager::new();
        let a = other.add_cell(Cell::at_point(v(0.0, 0.0)));
        let b = other.add_cell(Cell::at_point(v(100.0, 0.0)));
        other.connect_cells(&ConnectionInfo::left_to_right(a, b)).unwrap();
        let carried = other.cell(a).unwrap().clone();
        assert!(carried.has_connections());

        let mut m = CellsManager::new();
        let id = m.add_cell(carried);
        assert!(!m.cell(id).unwrap().has_connections());
        m.check_invariants().unwrap();
    }

    #[test]
    fn chain_follows_right_links_only() {
        let mut m = CellsManager::new();
        let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
        let b = m.add_cell(Cell::at_point(v(100.0, 0.0)));
        let c = m.add_cell(Cell::at_point(v(200.0, 0.0)));
        m.connect_cells(&ConnectionInfo::left_to_right(a, b)).unwrap();
        m.connect_cells(&ConnectionInfo::left_to_right(b, c)).unwrap();
        assert_eq!(m.chain_to_the_right(b), vec![b, c]);
        assert_eq!(m.chain_to_the_right(a), vec![a, b, c]);
        assert_eq!(m.chain_to_the_right(c), vec![c]);
    }

    #[test]
    fn picking_prefers_nearest_corner_and_latest_cell() {
        let mut m = CellsManager::new();
        let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
        let b = m.add_cell(Cell::at_point(v(60.0, 0.0)));
        assert_eq!(m.pick_corner(v(48.0, -39.0), 5.0), Some(PeerRef { cell: a, corner: Corner::RightTop }));
        assert_eq!(m.pick_corner(v(11.0, -39.0), 5.0), Some(PeerRef { cell: b, corner: Corner::LeftTop }));
        assert_eq!(m.pick_corner(v(300.0, 0.0), 5.0), None);
        assert_eq!(m.pick_cell(v(-30.0, 0.0), 1.0), Some(a));
        assert_eq!(m.pick_cell(v(30.0, 0.0), 1.0), Some(b));
        assert_eq!(m.pick_cell(v(0.0, 300.0), 1.0), None);
    }

    #[test]
    fn connections_are_listed_once() {
        let mut m = CellsManager::new();
        let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
        let b = m.add_cell(Cell::at_point(v(100.0, 0.0)));
        m.connect_cells(&ConnectionInfo::left_to_right(a, b).inverted()).unwrap();
        let all = m.connections();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], ConnectionInfo::left_to_right(a, b));
        assert_eq!(m.connection_between(b, a), Some(ConnectionInfo::left_to_right(a, b)));
    }
}
