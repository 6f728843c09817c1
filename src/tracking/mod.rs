//! Experiment tracking
//!
//! Replaces the ambient "active run" context of the original workflow with
//! an explicit handle: [`Tracker::start_run`] returns a [`RunGuard`] that
//! records parameters and metrics while open and closes the run on every
//! exit path, persisting the record through a [`StorageBackend`].

pub mod run;
pub mod storage;

pub use run::{Run, RunGuard, RunStatus, Tracker};
pub use storage::{LocalStorage, StorageBackend};
