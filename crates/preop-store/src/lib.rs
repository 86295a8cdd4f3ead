//! Local persistence for the inspection app: the saved-record map, the
//! template blob, and the embedded fleet catalog.

pub mod error;
pub mod state;
pub mod vehicles;

pub use error::{Result, StoreError};
pub use state::Store;
pub use vehicles::{SUGGESTION_CAP, find_vehicle, fleet, suggest_vehicles};
