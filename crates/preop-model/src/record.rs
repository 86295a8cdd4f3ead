//! Saved inspection records, one per vehicle and calendar date.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{FuelType, ItemStatus, LicenseCategory};

/// One signature slot on the form. Re-signing overwrites the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub full_name: String,
    pub id_number: String,
    pub role: String,
    /// Display string, written to the sheet verbatim.
    pub signed_at_display: String,
}

/// The two signature slots a record can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<SignatureBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_officer: Option<SignatureBlock>,
}

/// A full day's inspection for one vehicle.
///
/// Persisted keyed by `{plate}_{YYYY-MM-DD}`; an explicit save for the same
/// key replaces the whole record. Never deleted automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub vehicle_plate: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub odometer_start: Option<u64>,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    #[serde(default)]
    pub license_categories: BTreeSet<LicenseCategory>,
    #[serde(default)]
    pub license_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub sota_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub rtm_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub policy_expiry: Option<NaiveDate>,
    pub date: NaiveDate,
    /// Monday of the week containing `date`, `YYYY-MM-DD`. Derived on save.
    #[serde(default)]
    pub week_id: String,
    #[serde(default)]
    pub responses: BTreeMap<u16, ItemStatus>,
    #[serde(default)]
    pub signatures: Signatures,
}

impl InspectionRecord {
    /// New empty record for a plate and date.
    pub fn new(plate: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            vehicle_plate: plate.into(),
            driver_name: String::new(),
            city: String::new(),
            vehicle_type: String::new(),
            brand: String::new(),
            model: String::new(),
            odometer_start: None,
            fuel_type: None,
            license_categories: BTreeSet::new(),
            license_expiry: None,
            sota_expiry: None,
            rtm_expiry: None,
            policy_expiry: None,
            date,
            week_id: String::new(),
            responses: BTreeMap::new(),
            signatures: Signatures::default(),
        }
    }

    /// Storage key: `{plate}_{YYYY-MM-DD}`.
    pub fn storage_key(&self) -> String {
        storage_key(&self.vehicle_plate, self.date)
    }
}

/// Storage key for a plate and date.
pub fn storage_key(plate: &str, date: NaiveDate) -> String {
    format!("{plate}_{}", date.format("%Y-%m-%d"))
}
