pub mod model;
pub mod geometry {
    pub mod cubic;
    pub mod flatten;
    pub mod intersect;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod cell;
pub mod config;
pub mod connection;
pub mod error;
pub mod manager;
pub mod shapes;

pub use cell::Cell;
pub use config::ManagerConfig;
pub use connection::{ConnectionInfo, InsertionInfo};
pub use error::{CellsError, Result};
pub use manager::CellsManager;
pub use model::{CellId, Corner, PeerRef, Point, Rect, Vec2};
pub use shapes::ShapeTemplate;
