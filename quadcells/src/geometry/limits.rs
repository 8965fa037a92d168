// Centralized limits guarding against untrusted snapshot and config input

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;
pub const DISTANCE_MAX: f32 = 1_000_000.0;

// Flattening density per cubic element
pub const MAX_SEGMENTS_PER_ELEMENT: usize = 256;

// Scene size cap
pub const MAX_CELLS: usize = 100_000;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_distance_bounds(d: f32) -> bool { d.is_finite() && d >= 0.0 && d <= DISTANCE_MAX }
