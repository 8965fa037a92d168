use crate::CellsManager;
use js_sys::Float32Array;
use quadcells::geometry::limits::{in_coord_bounds, in_distance_bounds, COORD_MAX, COORD_MIN, DISTANCE_MAX, MAX_CELLS};
use quadcells::{Cell, CellId, Corner, ManagerConfig, ShapeTemplate, Vec2};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: serde::Serialize + ?Sized>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or(JsValue::NULL)
}

fn is_ok_result(v: &JsValue) -> bool {
    js_sys::Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

fn check_point(x: f32, y: f32) -> Result<Vec2, JsValue> {
    if !x.is_finite() {
        return Err(error::non_finite("x"));
    }
    if !y.is_finite() {
        return Err(error::non_finite("y"));
    }
    if !in_coord_bounds(x) {
        return Err(error::out_of_range("x", COORD_MIN, COORD_MAX, x));
    }
    if !in_coord_bounds(y) {
        return Err(error::out_of_range("y", COORD_MIN, COORD_MAX, y));
    }
    Ok(Vec2::new(x, y))
}

#[wasm_bindgen]
impl CellsManager {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CellsManager {
        crate::CellsManager::rs_new()
    }

    // Config
    pub fn get_config(&self) -> JsValue {
        to_js(self.inner.config())
    }
    pub fn set_config_res(&mut self, json: &str) -> JsValue {
        let cfg = match ManagerConfig::from_json_str(json) {
            Ok(cfg) => cfg,
            Err(e) => return error::from_cells_error(&e),
        };
        match self.inner.set_config(cfg) {
            Ok(()) => {
                self.invalidate_candidates();
                error::ok(to_js(self.inner.config()))
            }
            Err(e) => error::from_cells_error(&e),
        }
    }

    // Cells
    pub fn add_cell(&mut self, x: f32, y: f32, shape: u32) -> Option<u32> {
        let p = check_point(x, y).ok()?;
        if self.inner.cell_count() >= MAX_CELLS {
            return None;
        }
        self.invalidate_candidates();
        Some(self.inner.add_cell(Cell::with_shape(ShapeTemplate::from_index(shape as usize), p)).0)
    }
    pub fn add_cell_res(&mut self, x: f32, y: f32, shape: u32) -> JsValue {
        if let Err(e) = check_point(x, y) {
            return e;
        }
        if self.inner.cell_count() >= MAX_CELLS {
            return error::err("capacity", format!("at most {} cells", MAX_CELLS), None);
        }
        match self.add_cell(x, y, shape) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::err("capacity", "cell could not be added", None),
        }
    }
    /// Re-create a cell from `get_cell_json` output. Links are not restored.
    pub fn add_cell_json_res(&mut self, json: &str) -> JsValue {
        let cell: Cell = match serde_json::from_str(json) {
            Ok(c) => c,
            Err(e) => return error::err("invalid_json", e.to_string(), None),
        };
        if cell.geometry_data().iter().any(|v| !in_coord_bounds(v.x) || !in_coord_bounds(v.y)) {
            return error::err("invalid_geometry", "cell geometry out of bounds", None);
        }
        if self.inner.cell_count() >= MAX_CELLS {
            return error::err("capacity", format!("at most {} cells", MAX_CELLS), None);
        }
        self.invalidate_candidates();
        error::ok(JsValue::from_f64(self.inner.add_cell(cell).0 as f64))
    }
    pub fn get_cell_json(&self, id: u32) -> Option<String> {
        self.inner.cell(CellId(id)).and_then(|c| serde_json::to_string(c).ok())
    }
    pub fn remove_cell(&mut self, id: u32) -> bool {
        self.invalidate_candidates();
        self.inner.remove_cell(CellId(id)).is_ok()
    }
    pub fn remove_cell_res(&mut self, id: u32) -> JsValue {
        if self.inner.cell(CellId(id)).is_none() {
            return error::invalid_id(id);
        }
        self.invalidate_candidates();
        match self.inner.remove_cell(CellId(id)) {
            Ok(_) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_cells_error(&e),
        }
    }
    pub fn cell_count(&self) -> u32 {
        self.inner.cell_count() as u32
    }
    pub fn cell_ids(&self) -> js_sys::Uint32Array {
        let ids: Vec<u32> = self.inner.cells().map(|(id, _)| id.0).collect();
        interop::arr_u32(&ids)
    }

    // Editing
    pub fn move_cell_by(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        is_ok_result(&self.move_cell_by_res(id, dx, dy))
    }
    /// Rejects moves that would carry any corner outside the coordinate bounds.
    pub fn move_cell_by_res(&mut self, id: u32, dx: f32, dy: f32) -> JsValue {
        if !dx.is_finite() {
            return error::non_finite("dx");
        }
        if !dy.is_finite() {
            return error::non_finite("dy");
        }
        let Some(cell) = self.inner.cell(CellId(id)) else {
            return error::invalid_id(id);
        };
        let delta = Vec2::new(dx, dy);
        for corner in Corner::ALL {
            let p = cell.position(corner) + delta;
            if !in_coord_bounds(p.x) {
                return error::out_of_range("dx", COORD_MIN, COORD_MAX, p.x);
            }
            if !in_coord_bounds(p.y) {
                return error::out_of_range("dy", COORD_MIN, COORD_MAX, p.y);
            }
        }
        self.invalidate_candidates();
        match self.inner.move_cell_by(CellId(id), delta) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_cells_error(&e),
        }
    }
    pub fn set_corner_position_res(&mut self, id: u32, corner: u8, x: f32, y: f32) -> JsValue {
        let p = match check_point(x, y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let Some(corner_id) = Corner::from_index(corner as usize) else {
            return error::invalid_corner(corner);
        };
        if self.inner.cell(CellId(id)).is_none() {
            return error::invalid_id(id);
        }
        self.invalidate_candidates();
        match self.inner.set_corner_position(CellId(id), corner_id, p) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_cells_error(&e),
        }
    }

    // Rendering
    /// 8 floats per element (p0, c1, c2, p3), in path order from the left-top corner.
    pub fn get_path(&self, id: u32, closed: bool) -> JsValue {
        match self.inner.cell(CellId(id)) {
            Some(c) => {
                let path = c.bezier_path_relative_to(Vec2::ZERO, closed);
                interop::arr_f32(&path.to_flat_array()).into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn get_svg_path(&self, id: u32) -> Option<String> {
        self.inner.cell(CellId(id)).map(|c| c.bezier_path().to_svg_path_data())
    }
    /// `[min_x, min_y, max_x, max_y]`.
    pub fn get_bounding_box(&self, id: u32) -> JsValue {
        match self.inner.cell(CellId(id)) {
            Some(c) => {
                let bb = c.bounding_box();
                interop::arr_f32(&[bb.min.x, bb.min.y, bb.max.x, bb.max.y]).into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn get_center(&self, id: u32) -> JsValue {
        match self.inner.cell(CellId(id)) {
            Some(c) => interop::arr_vec2(&[c.center_point()]).into(),
            None => JsValue::NULL,
        }
    }
    /// Position, previous handle and next handle per corner: 24 floats.
    pub fn get_geometry(&self, id: u32) -> JsValue {
        match self.inner.cell(CellId(id)) {
            Some(c) => interop::arr_vec2(&c.geometry_data()).into(),
            None => JsValue::NULL,
        }
    }
    pub fn set_geometry_res(&mut self, id: u32, data: Float32Array) -> JsValue {
        let Some(values) = interop::vec2_from_flat(&data.to_vec()) else {
            return error::err("invalid_geometry", "odd number of values", None);
        };
        let Some(cell) = self.inner.cell_mut(CellId(id)) else {
            return error::invalid_id(id);
        };
        match cell.set_geometry_data(&values) {
            Ok(()) => {
                self.invalidate_candidates();
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::from_cells_error(&e),
        }
    }

    // Picking
    /// `{ cell, corner }` of the nearest corner within `tol`, or null.
    pub fn pick_corner(&self, x: f32, y: f32, tol: f32) -> JsValue {
        if !x.is_finite() || !y.is_finite() || !in_distance_bounds(tol) {
            return JsValue::NULL;
        }
        match self.inner.pick_corner(Vec2::new(x, y), tol) {
            Some(hit) => {
                let o = interop::new_obj();
                interop::set_kv(&o, "cell", &JsValue::from_f64(hit.cell.0 as f64));
                interop::set_kv(&o, "corner", &JsValue::from_f64(hit.corner.index() as f64));
                o.into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn pick_cell_res(&self, x: f32, y: f32, tol: f32) -> JsValue {
        let p = match check_point(x, y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        if !in_distance_bounds(tol) {
            return error::out_of_range("tol", 0.0, DISTANCE_MAX, tol);
        }
        match self.inner.pick_cell(p, tol) {
            Some(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Topology
    /// Refresh and return the connection candidates; `connect_res(i)` realises entry `i`.
    pub fn available_connections(&mut self) -> JsValue {
        self.connections = self.inner.get_available_connections();
        to_js(&self.connections)
    }
    pub fn connect_res(&mut self, index: u32) -> JsValue {
        let Some(info) = self.connections.get(index as usize).copied() else {
            return error::invalid_index("connection", index, self.connections.len());
        };
        self.invalidate_candidates();
        match self.inner.connect_cells(&info) {
            Ok(()) => error::ok(to_js(&info)),
            Err(e) => error::from_cells_error(&e),
        }
    }
    /// Refresh and return the insertion candidates; `insert_res(i)` realises entry `i`.
    pub fn available_insertions(&mut self) -> JsValue {
        self.insertions = self.inner.get_available_insertions();
        to_js(&self.insertions)
    }
    pub fn insert_res(&mut self, index: u32) -> JsValue {
        let Some(info) = self.insertions.get(index as usize).copied() else {
            return error::invalid_index("insertion", index, self.insertions.len());
        };
        self.invalidate_candidates();
        match self.inner.insert_cell(&info) {
            Ok(()) => error::ok(to_js(&info)),
            Err(e) => error::from_cells_error(&e),
        }
    }
    pub fn get_connections(&self) -> JsValue {
        to_js(&self.inner.connections())
    }
    pub fn disconnect_cell(&mut self, id: u32) -> u32 {
        self.invalidate_candidates();
        self.inner.disconnect_cell(CellId(id)) as u32
    }
    pub fn update_cell_connections(&mut self, id: u32) -> u32 {
        self.invalidate_candidates();
        self.inner.update_cell_connections(CellId(id)) as u32
    }
    pub fn update_all_connections(&mut self) -> u32 {
        self.invalidate_candidates();
        self.inner.update_all_connections() as u32
    }
    pub fn check_invariants_res(&self) -> JsValue {
        match self.inner.check_invariants() {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_cells_error(&e),
        }
    }
}

impl Default for CellsManager {
    fn default() -> Self {
        Self::new()
    }
}
