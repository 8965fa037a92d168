use serde::{Deserialize, Serialize};

use crate::error::{CellsError, Result};
use crate::geometry::limits::{in_distance_bounds, MAX_SEGMENTS_PER_ELEMENT};

/// Distance thresholds and sampling density used by `CellsManager`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Established links whose corners drift further apart than this are severed.
    pub connection_distance: f32,
    /// Corner pairs closer than this are proposed as connection candidates.
    pub connection_detection_distance: f32,
    /// Smallest side height a cell may be inserted against (inclusive).
    pub min_insertion_distance: f32,
    /// Flattening density for curve intersection tests.
    pub segments_per_element: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            connection_distance: 10.0,
            connection_detection_distance: 30.0,
            min_insertion_distance: 20.0,
            segments_per_element: 10,
        }
    }
}

impl ManagerConfig {
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("connection_distance", self.connection_distance),
            ("connection_detection_distance", self.connection_detection_distance),
            ("min_insertion_distance", self.min_insertion_distance),
        ];
        for (name, d) in distances {
            if !in_distance_bounds(d) {
                return Err(CellsError::InvalidConfig(format!("{} out of range: {}", name, d)));
            }
        }
        if self.connection_detection_distance < self.connection_distance {
            return Err(CellsError::InvalidConfig(format!(
                "connection_detection_distance ({}) must be >= connection_distance ({})",
                self.connection_detection_distance, self.connection_distance
            )));
        }
        if self.segments_per_element == 0 || self.segments_per_element > MAX_SEGMENTS_PER_ELEMENT {
            return Err(CellsError::InvalidConfig(format!(
                "segments_per_element must be in 1..={}, got {}",
                MAX_SEGMENTS_PER_ELEMENT, self.segments_per_element
            )));
        }
        Ok(())
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: ManagerConfig =
            serde_json::from_str(s).map_err(|e| CellsError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
