use proptest::prelude::*;
use quadcells::{Cell, CellsManager, Corner, ShapeTemplate, Vec2};

#[derive(Clone, Debug)]
enum Op {
    AddCell { gx: u8, gy: u8, shape: u8 },
    MoveCell { idx: u16, dx: i8, dy: i8 },
    DragCorner { idx: u16, corner: u8, dx: i8, dy: i8 },
    RemoveCell { idx: u16 },
    Connect { idx: u16 },
    Insert { idx: u16 },
    Disconnect { idx: u16 },
    Update { idx: u16 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8, 0u8..4, any::<u8>()).prop_map(|(gx, gy, shape)| Op::AddCell { gx, gy, shape }),
        1 => (any::<u16>(), any::<i8>(), any::<i8>()).prop_map(|(idx, dx, dy)| Op::MoveCell { idx, dx, dy }),
        1 => (any::<u16>(), 0u8..4, any::<i8>(), any::<i8>())
            .prop_map(|(idx, corner, dx, dy)| Op::DragCorner { idx, corner, dx, dy }),
        1 => any::<u16>().prop_map(|idx| Op::RemoveCell { idx }),
        3 => any::<u16>().prop_map(|idx| Op::Connect { idx }),
        2 => any::<u16>().prop_map(|idx| Op::Insert { idx }),
        1 => any::<u16>().prop_map(|idx| Op::Disconnect { idx }),
        1 => any::<u16>().prop_map(|idx| Op::Update { idx }),
    ]
}

fn pick<T: Copy>(items: &[T], idx: u16) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[idx as usize % items.len()])
    }
}

fn apply_op(m: &mut CellsManager, op: Op) {
    let ids = m.cell_ids();
    match op {
        Op::AddCell { gx, gy, shape } => {
            // grid spacing close to cell width so neighbours fall inside detection range
            let p = Vec2::new(gx as f32 * 104.0, gy as f32 * 90.0);
            m.add_cell(Cell::with_shape(ShapeTemplate::from_index(shape as usize), p));
        }
        Op::MoveCell { idx, dx, dy } => {
            if let Some(id) = pick(&ids, idx) {
                m.move_cell_by(id, Vec2::new(dx as f32 * 0.25, dy as f32 * 0.25)).unwrap();
            }
        }
        Op::DragCorner { idx, corner, dx, dy } => {
            if let Some(id) = pick(&ids, idx) {
                let corner = Corner::from_index(corner as usize).unwrap();
                let p = m.cell(id).unwrap().position(corner) + Vec2::new(dx as f32 * 0.1, dy as f32 * 0.1);
                m.set_corner_position(id, corner, p).unwrap();
            }
        }
        Op::RemoveCell { idx } => {
            if let Some(id) = pick(&ids, idx) {
                m.remove_cell(id).unwrap();
            }
        }
        Op::Connect { idx } => {
            let found = m.get_available_connections();
            if let Some(info) = pick(&found, idx) {
                m.connect_cells(&info).unwrap();
                let a = m.cell(info.cell_from).unwrap();
                let b = m.cell(info.cell_to).unwrap();
                assert_eq!(a.position(Corner::RightTop), b.position(Corner::LeftTop));
                assert_eq!(a.position(Corner::RightBottom), b.position(Corner::LeftBottom));
            }
        }
        Op::Insert { idx } => {
            let found = m.get_available_insertions();
            if let Some(info) = pick(&found, idx) {
                m.insert_cell(&info).unwrap();
                assert!(m.connection_between(info.cell_a, info.inserting_cell).is_some());
                assert!(m.connection_between(info.inserting_cell, info.cell_b).is_some());
            }
        }
        Op::Disconnect { idx } => {
            if let Some(id) = pick(&ids, idx) {
                m.disconnect_cell(id);
                assert!(!m.cell(id).unwrap().has_connections());
            }
        }
        Op::Update { idx } => {
            if let Some(id) = pick(&ids, idx) {
                m.update_cell_connections(id);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn graph_invariants_hold_under_random_ops(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut m = CellsManager::new();
        for op in ops {
            apply_op(&mut m, op);
            prop_assert!(m.check_invariants().is_ok(), "{:?}", m.check_invariants());
        }
    }

    #[test]
    fn candidates_never_touch_linked_corners(cells in prop::collection::vec((0u8..6, 0u8..3), 2..10)) {
        let mut m = CellsManager::new();
        for (gx, gy) in cells {
            m.add_cell(Cell::at_point(Vec2::new(gx as f32 * 103.0, gy as f32 * 95.0)));
        }
        // connect greedily, re-querying each time
        loop {
            let found = m.get_available_connections();
            let Some(info) = found.first() else { break; };
            for pr in info.affected_points() {
                prop_assert!(!m.resolve_peer(pr).unwrap().is_connected());
            }
            m.connect_cells(info).unwrap();
        }
        prop_assert!(m.check_invariants().is_ok());
    }
}
