//! File-backed patient registry
//!
//! The backing file holds a pretty-printed JSON array of [`PatientRecord`]s.
//! Reads never fail: an absent file is an empty registry, and an empty or
//! unparseable file is reset to `[]`. Writes rewrite the whole file and their
//! failures are returned to the caller.
//!
//! The store takes no locks. Callers that share one file between several
//! conversations must serialize access themselves.

use crate::record::PatientRecord;
use clinic_common::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owner of the on-disk patient list
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record.
    ///
    /// Corrupt content is logged, replaced by an empty array and reported as
    /// an empty registry. The only error returned is a failure to write that
    /// empty array back.
    pub fn load(&self) -> Result<Vec<PatientRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Registry file {:?} does not exist yet", self.path);
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!("Could not read registry file {:?}: {}", self.path, e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_slice::<Vec<PatientRecord>>(&bytes) {
            Ok(records) => {
                debug!("Loaded {} patient records", records.len());
                Ok(records)
            }
            Err(e) => {
                warn!(
                    "Registry file {:?} is empty or corrupt ({}), resetting it",
                    self.path, e
                );
                self.save(&[])?;
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the backing file with `records`.
    ///
    /// The array is written to a sibling temp file and renamed over the
    /// registry, so readers see either the old or the new list.
    pub fn save(&self, records: &[PatientRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Saved {} patient records to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Insert or replace the record keyed by `name` (case-insensitive).
    ///
    /// A replacement is a brand-new record: every field, the timestamp
    /// included, comes from this call.
    pub fn upsert(&self, name: &str, illness: &str, description: &str) -> Result<String> {
        let mut records = self.load()?;
        let record = PatientRecord::new(name, illness, description);

        let message = match records.iter().position(|p| p.matches_name(name)) {
            Some(index) => {
                records.retain(|p| !p.matches_name(name));
                records.insert(index.min(records.len()), record);
                info!("Updated patient {}", name);
                format!("Updated patient {} with illness: {}", name, illness)
            }
            None => {
                records.push(record);
                info!("Registered patient {}", name);
                format!("Registered patient {} with illness: {}", name, illness)
            }
        };

        self.save(&records)?;
        Ok(message)
    }

    /// Numbered `Name - Illness` listing for tool output
    pub fn list_as_text(&self) -> Result<String> {
        let records = self.load()?;
        if records.is_empty() {
            return Ok("No patients registered yet.".to_string());
        }

        let mut listing = String::from("Registered Patients:\n");
        for (i, p) in records.iter().enumerate() {
            listing.push_str(&format!("{}. {} - {}\n", i + 1, p.name, p.illness));
        }
        Ok(listing)
    }

    /// Drop every record
    pub fn clear(&self) -> Result<String> {
        self.save(&[])?;
        info!("Cleared patient registry at {:?}", self.path);
        Ok("All patient records cleared.".to_string())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "patients.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RegistryStore {
        RegistryStore::new(dir.path().join("patients.json"))
    }

    fn file_json(store: &RegistryStore) -> Value {
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap()
    }

    #[test]
    fn test_absent_file_is_empty_and_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_register_new_patient() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let message = store
            .upsert("Alex", "Headache and Fever", "Persistent headache")
            .unwrap();
        assert!(message.contains("Registered"));

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alex");
        assert_eq!(records[0].illness, "Headache and Fever");
        assert_eq!(records[0].description, "Persistent headache");
        assert_eq!(records[0].status, "registered");
    }

    #[test]
    fn test_upsert_replaces_whole_record_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .upsert("Alex", "Headache and Fever", "Persistent headache")
            .unwrap();
        let first_stamp = store.load().unwrap()[0].timestamp.clone();
        std::thread::sleep(std::time::Duration::from_millis(5));

        let message = store.upsert("alex", "Sore throat", "").unwrap();
        assert!(message.contains("Updated"));

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "alex");
        assert_eq!(records[0].illness, "Sore throat");
        assert_eq!(records[0].description, "");
        assert_ne!(records[0].timestamp, first_stamp);
    }

    #[test]
    fn test_update_keeps_position() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.upsert("Alex", "Cough", "").unwrap();
        store.upsert("Bea", "Rash", "").unwrap();
        store.upsert("Cam", "Flu", "").unwrap();

        store.upsert("BEA", "Allergy", "").unwrap();

        let names: Vec<_> = store.load().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alex", "BEA", "Cam"]);
    }

    #[test]
    fn test_upsert_collapses_existing_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&[
                PatientRecord::new("Alex", "Cough", ""),
                PatientRecord::new("ALEX", "Cold", ""),
            ])
            .unwrap();

        store.upsert("alex", "Flu", "").unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].illness, "Flu");
    }

    #[test]
    fn test_save_load_round_trip_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.upsert("Alex", "Cough", "dry, at night").unwrap();
        store.upsert("Bea", "Rash", "").unwrap();

        let before = file_json(&store);
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(file_json(&store), before);
    }

    #[test]
    fn test_file_is_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.upsert("Alex", "Cough", "").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"name\": \"Alex\""));
        assert!(!dir.path().join("patients.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let cases: [&[u8]; 5] = [
            b"",
            b"[{\"name\": \"Alex\", \"illn",
            b"not json at all",
            b"{\"name\": \"Alex\"}",
            &[0xff, 0xfe, b'[', 0x80],
        ];
        for garbage in cases {
            fs::write(store.path(), garbage).unwrap();
            assert!(store.load().unwrap().is_empty(), "content {:?}", garbage);
            assert_eq!(file_json(&store), serde_json::json!([]));
        }
    }

    #[test]
    fn test_corrupt_file_then_register() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{{{").unwrap();

        let message = store.upsert("Alex", "Cough", "").unwrap();
        assert!(message.starts_with("Registered"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_list_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.list_as_text().unwrap(), "No patients registered yet.");

        store.upsert("Alex", "Headache and Fever", "").unwrap();
        store.upsert("Bea", "Rash", "itchy").unwrap();
        assert_eq!(
            store.list_as_text().unwrap(),
            "Registered Patients:\n1. Alex - Headache and Fever\n2. Bea - Rash\n"
        );
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.upsert("Alex", "Cough", "").unwrap();

        assert_eq!(store.clear().unwrap(), "All patient records cleared.");
        assert!(store.load().unwrap().is_empty());
        assert_eq!(file_json(&store), serde_json::json!([]));
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("dashboard").join("patients.json"));
        store.upsert("Alex", "Cough", "").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the final rename fail.
        let path = dir.path().join("patients.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let store = RegistryStore::new(path);
        assert!(store.upsert("Alex", "Cough", "").is_err());
    }
}
