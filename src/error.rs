use js_sys::Object;
use wasm_bindgen::prelude::*;

use quadcells::CellsError;

use crate::interop::{new_obj, set_kv};

fn result_obj(ok: bool) -> Object {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(ok));
    o
}

fn param_data(param: &str) -> Object {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    d
}

pub fn ok(value: JsValue) -> JsValue {
    let o = result_obj(true);
    set_kv(&o, "value", &value);
    o.into()
}

/// `{ ok: false, error: { code, message, data? } }`; `code` is one of the stable strings hosts match on.
pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let detail = new_obj();
    set_kv(&detail, "code", &JsValue::from_str(code));
    set_kv(&detail, "message", &JsValue::from_str(&message.into()));
    if let Some(data) = data {
        set_kv(&detail, "data", &data);
    }
    let o = result_obj(false);
    set_kv(&o, "error", &detail.into());
    o.into()
}

pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("{} is NaN or infinite", param), Some(param_data(param).into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = param_data(param);
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "max", &JsValue::from_f64(max as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str("cell"));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", "invalid cell id", Some(d.into()))
}

#[inline]
pub fn invalid_corner(got: u8) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("invalid_corner", "corner must be 0:LeftTop, 1:LeftBottom, 2:RightTop, 3:RightBottom", Some(d.into()))
}

/// Candidate lists are dropped on every mutation, so an index can outlive its list.
#[inline]
pub fn invalid_index(kind: &str, index: u32, len: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err("invalid_index", format!("no {} candidate at index {}", kind, index), Some(d.into()))
}

pub fn from_cells_error(e: &CellsError) -> JsValue {
    let d = new_obj();
    match e {
        CellsError::UnknownCell(id) | CellsError::SelfConnection(id) => set_cell(&d, "cell", id.0),
        CellsError::CornerAlreadyConnected { cell, corner } => {
            set_cell(&d, "cell", cell.0);
            set_kv(&d, "corner", &JsValue::from_f64(corner.index() as f64));
        }
        CellsError::IllegalPairing { from: a, to: b } | CellsError::NotConnected { a, b } => {
            set_cell(&d, "a", a.0);
            set_cell(&d, "b", b.0);
        }
        CellsError::StaleInsertion { inserting, .. } => set_cell(&d, "cell", inserting.0),
        CellsError::InvalidGeometryData(_) | CellsError::InvalidConfig(_) | CellsError::Corrupted(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

fn set_cell(d: &Object, key: &str, id: u32) {
    set_kv(d, key, &JsValue::from_f64(id as f64));
}
