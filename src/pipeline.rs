//! End-to-end CI training flow
//!
//! One linear pass: resolve paths, load the dataset, split off the target,
//! partition, fit and evaluate inside a tracked run, and hand the run id to
//! the CI workflow through the artifact file.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::PipelineConfig;
use crate::data;
use crate::error::Result;
use crate::tracking::Tracker;
use crate::training::{ClassificationReport, RandomForestClassifier};

/// Outcome of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub run_id: String,
    pub accuracy: f64,
    pub n_train: usize,
    pub n_test: usize,
    pub artifact_path: PathBuf,
}

/// Run the training pipeline.
///
/// Returns `Ok(None)` when the dataset file is missing: a diagnostic is
/// printed and the process is expected to exit successfully without starting
/// a run or writing an artifact. That is the only locally recovered error;
/// everything else propagates.
pub fn run(config: &PipelineConfig) -> Result<Option<TrainReport>> {
    if !config.data_path.exists() {
        println!(
            "Error: dataset not found at: {}",
            config.data_path.display()
        );
        return Ok(None);
    }

    let df = data::load_csv(&config.data_path)?;
    info!(
        rows = df.height(),
        cols = df.width(),
        path = %config.data_path.display(),
        "dataset loaded"
    );

    let (x, y, _feature_names) = data::split_features(&df, &config.target_column)?;
    let (x_train, x_test, y_train, y_test) =
        data::train_test_split(&x, &y, config.test_ratio, config.seed)?;
    info!(
        n_train = x_train.nrows(),
        n_test = x_test.nrows(),
        "partitioned dataset"
    );

    let tracker = Tracker::new(config.runs_dir.clone());
    let mut run = tracker.start_run("ci-training");

    // Instrumentation is active before the fit: the hyperparameter set and
    // data shape are already on the run whichever way it ends.
    run.autolog_params(&config.params);
    run.log_param("data_path", config.data_path.display().to_string());
    run.log_param("test_ratio", config.test_ratio);
    run.log_param("seed", config.seed);
    run.log_param("n_train", x_train.nrows());
    run.log_param("n_test", x_test.nrows());

    let mut model = RandomForestClassifier::from_params(&config.params);
    model.fit(&x_train, &y_train)?;

    let y_pred = model.predict(&x_test)?;
    let report = ClassificationReport::compute(&y_test, &y_pred);
    run.log_metric("accuracy", report.accuracy);
    run.log_metric("precision", report.precision);
    run.log_metric("recall", report.recall);
    run.log_metric("f1_score", report.f1_score);
    info!(accuracy = report.accuracy, "evaluation complete");

    // The CI workflow reads the id from this file; it has to be on disk
    // before the run scope closes.
    fs::write(&config.artifact_path, run.id())?;
    run.log_artifact(&config.artifact_path);

    let outcome = TrainReport {
        run_id: run.id().to_string(),
        accuracy: report.accuracy,
        n_train: x_train.nrows(),
        n_test: x_test.nrows(),
        artifact_path: config.artifact_path.clone(),
    };
    run.finish()?;

    Ok(Some(outcome))
}
