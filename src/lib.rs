use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

pub use api::set_panic_hook;
pub use logging::init_logging;

/// Host-facing handle. Candidate lists from the last discovery call are cached so the
/// host can realise one by index; any mutation drops them.
#[wasm_bindgen]
pub struct CellsManager {
    pub(crate) inner: quadcells::CellsManager,
    pub(crate) connections: Vec<quadcells::ConnectionInfo>,
    pub(crate) insertions: Vec<quadcells::InsertionInfo>,
}

impl CellsManager {
    pub fn rs_new() -> CellsManager {
        CellsManager { inner: quadcells::CellsManager::new(), connections: Vec::new(), insertions: Vec::new() }
    }

    pub(crate) fn invalidate_candidates(&mut self) {
        self.connections.clear();
        self.insertions.clear();
    }
}
