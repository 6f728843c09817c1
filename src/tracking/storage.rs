//! Storage backend for experiment runs
//!
//! Finished and failed runs are persisted as one JSON document per run under
//! a local runs directory (`mlruns` by default).

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, TrainError};

use super::run::Run;

/// Storage backend for run records
pub trait StorageBackend {
    /// Persist one run record
    fn save_run(&self, run: &Run) -> Result<()>;

    /// Load a run record by id
    fn load_run(&self, run_id: &str) -> Result<Run>;

    /// List the ids of all persisted runs
    fn list_runs(&self) -> Result<Vec<String>>;
}

/// Local filesystem storage backend
pub struct LocalStorage {
    base_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn run_file(&self, run_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", run_id))
    }
}

impl StorageBackend for LocalStorage {
    fn save_run(&self, run: &Run) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(run)?;
        fs::write(self.run_file(&run.run_id), json)?;
        Ok(())
    }

    fn load_run(&self, run_id: &str) -> Result<Run> {
        let path = self.run_file(run_id);
        if !path.exists() {
            return Err(TrainError::Tracking(format!("run {} not found", run_id)));
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn list_runs(&self) -> Result<Vec<String>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::run::RunStatus;
    use chrono::Utc;
    use std::collections::HashMap;

    fn test_run(id: &str) -> Run {
        Run {
            run_id: id.to_string(),
            run_name: "test".to_string(),
            start_time: Utc::now(),
            end_time: None,
            status: RunStatus::Running,
            params: HashMap::new(),
            metrics: HashMap::new(),
            artifacts: Vec::new(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("kelayakan_test_storage_roundtrip");
        let _ = fs::remove_dir_all(&dir);
        let storage = LocalStorage::new(dir.clone());

        let mut run = test_run("run-1");
        run.params.insert("n_estimators".to_string(), "50".to_string());
        run.metrics.insert("accuracy".to_string(), 0.93);
        storage.save_run(&run).unwrap();

        let loaded = storage.load_run("run-1").unwrap();
        assert_eq!(loaded.run_id, "run-1");
        assert_eq!(loaded.params.get("n_estimators").unwrap(), "50");
        assert!((loaded.metrics["accuracy"] - 0.93).abs() < 1e-12);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_runs() {
        let dir = std::env::temp_dir().join("kelayakan_test_storage_list");
        let _ = fs::remove_dir_all(&dir);
        let storage = LocalStorage::new(dir.clone());

        storage.save_run(&test_run("b")).unwrap();
        storage.save_run(&test_run("a")).unwrap();
        assert_eq!(storage.list_runs().unwrap(), vec!["a", "b"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_run_errors() {
        let dir = std::env::temp_dir().join("kelayakan_test_storage_missing");
        let _ = fs::remove_dir_all(&dir);
        let storage = LocalStorage::new(dir);
        assert!(storage.load_run("nope").is_err());
    }
}
