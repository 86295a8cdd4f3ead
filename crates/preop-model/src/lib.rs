pub mod checklist;
pub mod enums;
pub mod record;
pub mod vehicle;

pub use checklist::{ChecklistItem, Section, catalog, item_ids, item_label};
pub use enums::{FuelType, ItemStatus, LicenseCategory};
pub use record::{InspectionRecord, SignatureBlock, Signatures, storage_key};
pub use vehicle::{Vehicle, normalize_plate};
