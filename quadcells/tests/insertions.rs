use quadcells::{Cell, CellId, CellsError, CellsManager, ConnectionInfo, Corner, InsertionInfo, ManagerConfig, Vec2};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

/// A and B connected edge to edge, plus a free cell C overlapping the seam.
fn connected_pair_with_overlap() -> (CellsManager, CellId, CellId, CellId) {
    let mut m = CellsManager::new();
    let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
    let b = m.add_cell(Cell::at_point(v(100.0, 0.0)));
    m.connect_cells(&ConnectionInfo::left_to_right(a, b)).unwrap();
    let c = m.add_cell(Cell::at_point(v(50.0, 10.0)));
    (m, a, b, c)
}

#[test]
fn overlapping_free_cell_is_offered_for_connected_pair() {
    let (m, a, b, c) = connected_pair_with_overlap();
    let found = m.get_available_insertions();
    assert_eq!(found.len(), 1);
    let ins = found[0];
    assert_eq!((ins.inserting_cell, ins.cell_a, ins.cell_b), (c, a, b));
    assert_eq!(ins.connection_a, Some(ConnectionInfo::left_to_right(a, c)));
    assert_eq!(ins.connection_b, Some(ConnectionInfo::left_to_right(c, b)));
}

#[test]
fn insertion_threshold_is_inclusive() {
    // seam height of two default rectangles is exactly 80
    let (mut m, ..) = connected_pair_with_overlap();
    m.set_config(ManagerConfig { min_insertion_distance: 80.0, ..Default::default() }).unwrap();
    assert_eq!(m.get_available_insertions().len(), 1);
    m.set_config(ManagerConfig { min_insertion_distance: 80.01, ..Default::default() }).unwrap();
    assert!(m.get_available_insertions().is_empty());
}

#[test]
fn non_overlapping_cell_is_not_offered() {
    let (mut m, a, ..) = connected_pair_with_overlap();
    let far = m.add_cell(Cell::at_point(v(0.0, 500.0)));
    assert!(m.get_available_insertions().iter().all(|i| i.inserting_cell != far));
    // a cell touching only one side of the seam
    let one_side = m.add_cell(Cell::at_point(v(-30.0, 60.0)));
    assert!(m.cell(one_side).unwrap().intersects_with_cell(m.cell(a).unwrap(), 10));
    assert!(m.get_available_insertions().iter().all(|i| i.inserting_cell != one_side));
}

#[test]
fn insert_into_connection_rewires_and_shifts() {
    let (mut m, a, b, c) = connected_pair_with_overlap();
    let ins = m.get_available_insertions()[0];
    m.insert_cell(&ins).unwrap();

    assert!(m.connection_between(a, b).is_none());
    assert_eq!(m.connection_between(a, c), Some(ConnectionInfo::left_to_right(a, c)));
    assert_eq!(m.connection_between(c, b), Some(ConnectionInfo::left_to_right(c, b)));

    let (ca, cb, cc) = (m.cell(a).unwrap(), m.cell(b).unwrap(), m.cell(c).unwrap());
    assert_eq!(cc.position(Corner::LeftTop), ca.position(Corner::RightTop));
    assert_eq!(cc.position(Corner::LeftBottom), ca.position(Corner::RightBottom));
    assert_eq!(cc.position(Corner::RightTop), cb.position(Corner::LeftTop));
    assert_eq!(cc.position(Corner::RightBottom), cb.position(Corner::LeftBottom));
    // b made room for the inserted cell's width
    assert!(close(cb.center_point(), v(200.0, 0.0)));
    assert!((cc.width() - 100.0).abs() < 1e-3);
    m.check_invariants().unwrap();
}

#[test]
fn cells_chained_after_b_move_with_it() {
    let (mut m, a, b, c) = connected_pair_with_overlap();
    let d = m.add_cell(Cell::at_point(v(200.0, 0.0)));
    m.connect_cells(&ConnectionInfo::left_to_right(b, d)).unwrap();
    let before = m.cell(d).unwrap().center_point();

    let ins = *m
        .get_available_insertions()
        .iter()
        .find(|i| i.inserting_cell == c && i.cell_a == a)
        .unwrap();
    m.insert_cell(&ins).unwrap();

    assert!(close(m.cell(d).unwrap().center_point(), before + v(100.0, 0.0)));
    assert!(m.connection_between(b, d).is_some());
    assert_eq!(m.connections().len(), 3);
    m.check_invariants().unwrap();
}

#[test]
fn facing_unconnected_pair_is_offered_without_connections() {
    let mut m = CellsManager::new();
    let a = m.add_cell(Cell::at_point(v(0.0, 0.0)));
    let b = m.add_cell(Cell::at_point(v(150.0, 0.0)));
    let c = m.add_cell(Cell::at_point(v(75.0, 10.0)));
    assert!(m.connection_between(a, b).is_none());

    let found = m.get_available_insertions();
    assert_eq!(found.len(), 1);
    let ins = found[0];
    assert_eq!((ins.inserting_cell, ins.cell_a, ins.cell_b), (c, a, b));
    assert!(!ins.has_connections());

    m.insert_cell(&ins).unwrap();
    assert!(m.connection_between(a, c).is_some());
    assert!(m.connection_between(c, b).is_some());
    assert!(close(m.cell(b).unwrap().center_point(), v(200.0, 0.0)));
    m.check_invariants().unwrap();
}

#[test]
fn stale_insertion_is_rejected() {
    let (mut m, a, b, c) = connected_pair_with_overlap();
    let ins = m.get_available_insertions()[0];
    m.disconnect_cells(a, b).unwrap();
    let err = m.insert_cell(&ins).unwrap_err();
    assert_eq!(err.code(), "stale_insertion");
    assert!(!m.cell(c).unwrap().has_connections());
}

#[test]
fn connected_inserting_cell_is_rejected() {
    let (mut m, a, b, c) = connected_pair_with_overlap();
    let ins = m.get_available_insertions()[0];
    let e = m.add_cell(Cell::at_point(v(50.0, 200.0)));
    m.connect_cells(&ConnectionInfo::left_to_right(e, c)).unwrap();
    let err = m.insert_cell(&ins).unwrap_err();
    assert!(matches!(err, CellsError::CornerAlreadyConnected { cell, .. } if cell == c));
    assert!(m.connection_between(a, b).is_some());
}

#[test]
fn insertion_cells_must_be_distinct() {
    let (mut m, a, b, _) = connected_pair_with_overlap();
    let ins = quadcells::InsertionInfo::new(a, a, b);
    assert_eq!(m.insert_cell(&ins).unwrap_err().code(), "stale_insertion");
}

#[test]
fn mismatched_connections_leave_graph_untouched() {
    let (mut m, a, b, c) = connected_pair_with_overlap();
    let snapshot = |m: &CellsManager| -> Vec<Vec<Vec2>> {
        [a, b, c].iter().map(|&id| m.cell(id).unwrap().geometry_data()).collect()
    };
    let before = snapshot(&m);
    let links = m.connections();

    let wrong = [
        InsertionInfo::new(c, a, b)
            .with_connections(ConnectionInfo::left_to_right(a, b), ConnectionInfo::left_to_right(c, b)),
        InsertionInfo::new(c, a, b)
            .with_connections(ConnectionInfo::left_to_right(a, c), ConnectionInfo::left_to_right(b, c)),
        InsertionInfo { connection_b: None, ..InsertionInfo::new(c, a, b).with_connections(
            ConnectionInfo::left_to_right(a, c),
            ConnectionInfo::left_to_right(c, b),
        ) },
    ];
    for ins in wrong {
        let err = m.insert_cell(&ins).unwrap_err();
        assert_eq!(err.code(), "stale_insertion");
        assert_eq!(snapshot(&m), before);
        assert_eq!(m.connections(), links);
        assert!(!m.cell(c).unwrap().has_connections());
    }

    // inverted infos describe the same pairing and are accepted
    let ins = InsertionInfo::new(c, a, b).with_connections(
        ConnectionInfo::left_to_right(a, c).inverted(),
        ConnectionInfo::left_to_right(c, b).inverted(),
    );
    m.insert_cell(&ins).unwrap();
    assert!(m.connection_between(a, c).is_some() && m.connection_between(c, b).is_some());
    m.check_invariants().unwrap();
}
