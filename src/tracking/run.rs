//! Run lifecycle
//!
//! A run moves through not-started → running → finished (or failed). The
//! guard returned by [`Tracker::start_run`] owns the running state: dropping
//! it closes the run no matter how the scope exits, and only an explicit
//! [`RunGuard::finish`] records success.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::ForestParams;
use crate::error::Result;

use super::storage::{LocalStorage, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Finished,
    Failed,
}

/// One tracked training execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub run_id: String,
    pub run_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: RunStatus,
    pub params: HashMap<String, String>,
    pub metrics: HashMap<String, f64>,
    pub artifacts: Vec<String>,
}

/// Hands out run guards backed by local storage.
pub struct Tracker {
    storage: LocalStorage,
}

impl Tracker {
    pub fn new(runs_dir: PathBuf) -> Self {
        Self {
            storage: LocalStorage::new(runs_dir),
        }
    }

    /// Start a run. The id is available on the guard immediately.
    ///
    /// The guard persists the run when it closes. If it is dropped without
    /// [`RunGuard::finish`] — early `?` return, panic unwind — the run is
    /// recorded as failed.
    pub fn start_run(&self, name: &str) -> RunGuard<'_> {
        let run = Run {
            run_id: Uuid::new_v4().to_string(),
            run_name: name.to_string(),
            start_time: Utc::now(),
            end_time: None,
            status: RunStatus::Running,
            params: HashMap::new(),
            metrics: HashMap::new(),
            artifacts: Vec::new(),
        };
        tracing::info!(run_id = %run.run_id, name, "run started");

        RunGuard {
            run,
            storage: &self.storage,
            closed: false,
        }
    }
}

/// Guaranteed-release handle to a running tracked run.
pub struct RunGuard<'a> {
    run: Run,
    storage: &'a LocalStorage,
    closed: bool,
}

impl RunGuard<'_> {
    /// The run identifier assigned at start.
    pub fn id(&self) -> &str {
        &self.run.run_id
    }

    pub fn log_param(&mut self, key: &str, value: impl ToString) {
        self.run.params.insert(key.to_string(), value.to_string());
    }

    pub fn log_metric(&mut self, key: &str, value: f64) {
        self.run.metrics.insert(key.to_string(), value);
    }

    pub fn log_artifact(&mut self, path: &Path) {
        self.run.artifacts.push(path.display().to_string());
    }

    /// Record the whole hyperparameter set on the run, the way autologging
    /// captures fit parameters. Must be called before the fit step so the
    /// record exists whichever way the run ends.
    pub fn autolog_params(&mut self, params: &ForestParams) {
        self.log_param("model", "RandomForestClassifier");
        self.log_param("n_estimators", params.n_estimators);
        self.log_param("max_depth", params.max_depth);
        self.log_param("min_samples_split", params.min_samples_split);
        self.log_param("random_state", params.random_state);
    }

    /// Close the run as finished and persist it.
    pub fn finish(mut self) -> Result<Run> {
        self.run.status = RunStatus::Finished;
        self.run.end_time = Some(Utc::now());
        self.storage.save_run(&self.run)?;
        self.closed = true;
        tracing::info!(run_id = %self.run.run_id, "run finished");
        Ok(self.run.clone())
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.run.status = RunStatus::Failed;
        self.run.end_time = Some(Utc::now());
        // Drop cannot propagate; a persist failure here only loses the record.
        if let Err(e) = self.storage.save_run(&self.run) {
            tracing::warn!(run_id = %self.run.run_id, error = %e, "failed to persist run record");
        } else {
            tracing::warn!(run_id = %self.run.run_id, "run closed as failed");
        }
    }
}
