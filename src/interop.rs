use js_sys::{Float32Array, Object, Reflect, Uint32Array};
use wasm_bindgen::JsValue;

use quadcells::Vec2;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_u32(data: &[u32]) -> Uint32Array { Uint32Array::from(data) }
pub fn arr_f32(data: &[f32]) -> Float32Array { Float32Array::from(data) }

/// Interleaved `[x0, y0, x1, y1, ...]`.
pub fn arr_vec2(points: &[Vec2]) -> Float32Array {
    let flat: Vec<f32> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    arr_f32(&flat)
}

/// Inverse of `arr_vec2`; a trailing odd value is rejected.
pub fn vec2_from_flat(data: &[f32]) -> Option<Vec<Vec2>> {
    if data.len() % 2 != 0 {
        return None;
    }
    Some(data.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}
