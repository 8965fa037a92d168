// Centralized tolerances for robust geometry

pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold
pub const EPS_DENOM: f64 = 1e-9;          // determinant guard for segment solves
pub const EPS_PARAM: f64 = 1e-9;          // slack on segment parameters at 0 and 1

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
