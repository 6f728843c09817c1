//! Pipeline configuration
//!
//! Collapses the path conventions of the older script variants into one
//! explicit precedence: the `--data-path` argument wins, otherwise the fixed
//! output location of the preprocessing repository is used. The run-id
//! artifact always lands at `$GITHUB_WORKSPACE/run_id.txt`, falling back to
//! the working directory when the variable is unset.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset location produced by the preprocessing repository.
pub const DEFAULT_DATA_PATH: &str =
    "Kelayakan-pendidikan-indonesia_preprocessing/data_bersih.csv";

/// Target column of the cleaned dataset.
pub const TARGET_COLUMN: &str = "Status_Kelayakan";

/// Environment variable naming the CI workspace root.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// File name of the run-id artifact consumed by the CI workflow.
pub const RUN_ID_FILE: &str = "run_id.txt";

/// Fixed random-forest hyperparameters (best params from the tuning stage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub random_state: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 50,
            max_depth: 10,
            min_samples_split: 2,
            random_state: 42,
        }
    }
}

/// Resolved configuration for one training invocation.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input CSV with header row and the target column.
    pub data_path: PathBuf,
    pub target_column: String,
    /// Fraction of rows held out for evaluation.
    pub test_ratio: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
    pub params: ForestParams,
    /// Where the run id is written for the CI workflow to pick up.
    pub artifact_path: PathBuf,
    /// Directory where finished run records are persisted.
    pub runs_dir: PathBuf,
}

impl PipelineConfig {
    /// Resolve the configuration from an optional CLI-provided dataset path
    /// and the process environment.
    pub fn resolve(data_path: Option<PathBuf>) -> Self {
        let workspace = std::env::var_os(WORKSPACE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            data_path: data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            target_column: TARGET_COLUMN.to_string(),
            test_ratio: 0.2,
            seed: 42,
            params: ForestParams::default(),
            artifact_path: workspace.join(RUN_ID_FILE),
            runs_dir: PathBuf::from("mlruns"),
        }
    }

    /// Override the artifact path (mainly for tests).
    pub fn with_artifact_path(mut self, path: PathBuf) -> Self {
        self.artifact_path = path;
        self
    }

    /// Override the runs directory (mainly for tests).
    pub fn with_runs_dir(mut self, dir: PathBuf) -> Self {
        self.runs_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins_over_default() {
        let config = PipelineConfig::resolve(Some(PathBuf::from("custom/data.csv")));
        assert_eq!(config.data_path, PathBuf::from("custom/data.csv"));
    }

    #[test]
    fn test_default_path_when_no_cli_arg() {
        let config = PipelineConfig::resolve(None);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_fixed_hyperparameters() {
        let params = ForestParams::default();
        assert_eq!(params.n_estimators, 50);
        assert_eq!(params.max_depth, 10);
        assert_eq!(params.min_samples_split, 2);
        assert_eq!(params.random_state, 42);
    }

    #[test]
    fn test_artifact_file_name() {
        let config = PipelineConfig::resolve(None);
        assert_eq!(
            config.artifact_path.file_name().unwrap().to_str().unwrap(),
            RUN_ID_FILE
        );
    }
}
