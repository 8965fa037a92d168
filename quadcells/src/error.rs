use thiserror::Error;

use crate::model::{CellId, Corner};

/// Errors returned by graph-mutating operations and input validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellsError {
    #[error("unknown cell {0:?}")]
    UnknownCell(CellId),

    #[error("cell {0:?} cannot be connected to itself")]
    SelfConnection(CellId),

    #[error("corner {corner:?} of cell {cell:?} is already connected")]
    CornerAlreadyConnected { cell: CellId, corner: Corner },

    #[error("illegal corner pairing between {from:?} and {to:?}")]
    IllegalPairing { from: CellId, to: CellId },

    #[error("cells {a:?} and {b:?} are not connected")]
    NotConnected { a: CellId, b: CellId },

    #[error("insertion of {inserting:?} no longer matches the current graph: {reason}")]
    StaleInsertion { inserting: CellId, reason: &'static str },

    #[error("invalid geometry data: {0}")]
    InvalidGeometryData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("connection graph is inconsistent: {0}")]
    Corrupted(String),
}

impl CellsError {
    /// Stable snake_case code for host bindings.
    pub fn code(&self) -> &'static str {
        match self {
            CellsError::UnknownCell(_) => "unknown_cell",
            CellsError::SelfConnection(_) => "self_connection",
            CellsError::CornerAlreadyConnected { .. } => "corner_already_connected",
            CellsError::IllegalPairing { .. } => "illegal_pairing",
            CellsError::NotConnected { .. } => "not_connected",
            CellsError::StaleInsertion { .. } => "stale_insertion",
            CellsError::InvalidGeometryData(_) => "invalid_geometry",
            CellsError::InvalidConfig(_) => "invalid_config",
            CellsError::Corrupted(_) => "corrupted",
        }
    }
}

pub type Result<T> = std::result::Result<T, CellsError>;
