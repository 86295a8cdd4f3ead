//! The persisted state file.
//!
//! Two top-level entries: a base64-encoded template blob and a map from
//! `{plate}_{YYYY-MM-DD}` to a record. There is no schema versioning;
//! absent or malformed entries are discarded on load, never fatal. Write
//! failures are reported but leave the in-memory state usable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDate;
use preop_core::week_id;
use preop_model::{InspectionRecord, normalize_plate, storage_key};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(default)]
    records: BTreeMap<String, serde_json::Value>,
}

/// In-memory view of the state file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    template: Option<Vec<u8>>,
    records: BTreeMap<String, InspectionRecord>,
}

impl Store {
    /// Load state from `path`. A missing file yields an empty store;
    /// unreadable content is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = Self {
            path: path.clone(),
            template: None,
            records: BTreeMap::new(),
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return store,
            Err(error) => {
                warn!(path = %path.display(), %error, "state file unreadable, starting empty");
                return store;
            }
        };
        let file: StateFile = match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(error) => {
                warn!(path = %path.display(), %error, "state file malformed, starting empty");
                return store;
            }
        };

        if let Some(encoded) = file.template {
            match BASE64.decode(&encoded) {
                Ok(bytes) => store.template = Some(bytes),
                Err(error) => {
                    warn!(%error, "stored template blob malformed, discarded");
                }
            }
        }
        for (key, value) in file.records {
            match serde_json::from_value::<InspectionRecord>(value) {
                Ok(record) => {
                    store.records.insert(key, record);
                }
                Err(error) => {
                    warn!(key, %error, "stored record malformed, discarded");
                }
            }
        }
        debug!(
            path = %path.display(),
            records = store.records.len(),
            has_template = store.template.is_some(),
            "state loaded"
        );
        store
    }

    /// Persist the current state. On failure the in-memory state is
    /// untouched and stays usable for the session.
    pub fn save(&self) -> Result<()> {
        let file = StateFile {
            template: self.template.as_deref().map(|b| BASE64.encode(b)),
            records: self
                .records
                .iter()
                .map(|(key, record)| {
                    serde_json::to_value(record).map(|value| (key.clone(), value))
                })
                .collect::<std::result::Result<_, _>>()?,
        };
        let json = serde_json::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The template blob, if one is loaded.
    pub fn template(&self) -> Option<&[u8]> {
        self.template.as_deref()
    }

    pub fn set_template(&mut self, bytes: Vec<u8>) {
        self.template = Some(bytes);
    }

    pub fn clear_template(&mut self) {
        self.template = None;
    }

    /// Insert or replace the record for its `(plate, date)` key. The week
    /// identifier is derived here so stored records always carry it.
    pub fn upsert_record(&mut self, mut record: InspectionRecord) -> String {
        record.vehicle_plate = normalize_plate(&record.vehicle_plate);
        record.week_id = week_id(record.date);
        let key = record.storage_key();
        self.records.insert(key.clone(), record);
        key
    }

    /// The record for `(plate, date)`, if saved.
    pub fn record(&self, plate: &str, date: NaiveDate) -> Option<&InspectionRecord> {
        self.records.get(&storage_key(&normalize_plate(plate), date))
    }

    /// All records for a plate, any week, in key order.
    pub fn records_for_plate(&self, plate: &str) -> Vec<InspectionRecord> {
        let plate = normalize_plate(plate);
        self.records
            .values()
            .filter(|r| normalize_plate(&r.vehicle_plate) == plate)
            .cloned()
            .collect()
    }

    /// Number of saved records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use preop_model::InspectionRecord;

    use super::Store;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn round_trips_through_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let mut store = Store::open(&path);
        let key = store.upsert_record(InspectionRecord::new("abc 123", date(2024, 3, 14)));
        assert_eq!(key, "ABC123_2024-03-14");
        store.set_template(b"template bytes".to_vec());
        store.save().expect("save state");

        let reloaded = Store::open(&path);
        assert_eq!(reloaded.record_count(), 1);
        assert_eq!(reloaded.template(), Some(b"template bytes".as_slice()));
        let record = reloaded.record("ABC123", date(2024, 3, 14)).expect("saved record");
        assert_eq!(record.week_id, "2024-03-11");
    }

    #[test]
    fn save_overwrites_the_same_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = Store::open(dir.path().join("state.json"));
        let mut first = InspectionRecord::new("ABC123", date(2024, 3, 14));
        first.driver_name = "A".to_string();
        store.upsert_record(first);
        let mut second = InspectionRecord::new("ABC123", date(2024, 3, 14));
        second.driver_name = "B".to_string();
        store.upsert_record(second);

        assert_eq!(store.record_count(), 1);
        let record = store.record("ABC123", date(2024, 3, 14)).expect("record");
        assert_eq!(record.driver_name, "B");
    }

    #[test]
    fn malformed_entries_are_discarded_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        let json = r#"{
            "template": "!!! not base64 !!!",
            "records": {
                "ABC123_2024-03-14": {"vehicle_plate": "ABC123", "date": "2024-03-14"},
                "BROKEN_KEY": {"vehicle_plate": 42}
            }
        }"#;
        std::fs::write(&path, json).expect("write fixture");

        let store = Store::open(&path);
        assert!(store.template().is_none());
        assert_eq!(store.record_count(), 1);
        assert!(store.record("ABC123", date(2024, 3, 14)).is_some());
    }

    #[test]
    fn missing_or_garbage_file_yields_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = Store::open(dir.path().join("nope.json"));
        assert_eq!(missing.record_count(), 0);

        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json at all").expect("write fixture");
        let garbage = Store::open(&path);
        assert_eq!(garbage.record_count(), 0);
    }
}
