//! Embedded fleet catalog, read-only.
//!
//! Queried by normalized plate: exact match feeds autofill, substring match
//! feeds suggestions (capped at 10).

use std::sync::LazyLock;

use preop_model::{Vehicle, normalize_plate};
use tracing::warn;

/// Maximum number of substring matches returned.
pub const SUGGESTION_CAP: usize = 10;

static FLEET_JSON: &str = include_str!("../data/vehicles.json");

static FLEET: LazyLock<Vec<Vehicle>> = LazyLock::new(|| {
    serde_json::from_str(FLEET_JSON).unwrap_or_else(|error| {
        warn!(%error, "embedded fleet catalog malformed, catalog empty");
        Vec::new()
    })
});

/// The whole fleet in catalog order.
pub fn fleet() -> &'static [Vehicle] {
    &FLEET
}

/// Exact plate match, for autofill.
pub fn find_vehicle(plate: &str) -> Option<&'static Vehicle> {
    let plate = normalize_plate(plate);
    if plate.is_empty() {
        return None;
    }
    fleet().iter().find(|v| normalize_plate(&v.plate) == plate)
}

/// Substring plate matches, for suggestions. At most [`SUGGESTION_CAP`].
pub fn suggest_vehicles(query: &str) -> Vec<&'static Vehicle> {
    let query = normalize_plate(query);
    if query.is_empty() {
        return Vec::new();
    }
    fleet()
        .iter()
        .filter(|v| normalize_plate(&v.plate).contains(&query))
        .take(SUGGESTION_CAP)
        .collect()
}
