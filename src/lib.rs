//! Training pipeline for the Indonesian education eligibility classifier.
//!
//! This crate implements the CI-facing training flow: load the cleaned
//! dataset, split off the `Status_Kelayakan` target, partition with a fixed
//! seed, fit a random forest with the tuned hyperparameters, and record the
//! whole thing as a tracked experiment run whose id is handed off to the
//! surrounding workflow through a plain-text artifact file.
//!
//! # Modules
//!
//! - [`config`] - Path resolution and the fixed hyperparameter set
//! - [`data`] - CSV loading, feature/label extraction, train/test split
//! - [`training`] - Decision tree and random forest classifiers, metrics
//! - [`tracking`] - Experiment runs with close-on-drop guards
//! - [`pipeline`] - The end-to-end flow wired together

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod tracking;
pub mod training;

pub use error::{Result, TrainError};
