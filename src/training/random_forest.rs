//! Random forest classifier
//!
//! Bagged ensemble of Gini trees. Each tree gets a bootstrap sample and a
//! seed derived from `random_state`, so a fit is reproducible regardless of
//! how rayon schedules the per-tree work.

use super::decision_tree::DecisionTree;
use crate::config::ForestParams;
use crate::error::{Result, TrainError};
use ndarray::{Array1, Array2, Axis};
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    trees: Vec<DecisionTree>,
    /// Number of trees
    pub n_estimators: usize,
    /// Maximum depth per tree
    pub max_depth: Option<usize>,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    /// Base seed for bootstrap and feature subsampling
    pub random_state: u64,
    n_features: usize,
}

impl RandomForestClassifier {
    pub fn new(n_estimators: usize) -> Self {
        Self {
            trees: Vec::new(),
            n_estimators,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            random_state: 42,
            n_features: 0,
        }
    }

    /// Build a forest from the fixed hyperparameter set.
    pub fn from_params(params: &ForestParams) -> Self {
        Self::new(params.n_estimators)
            .with_max_depth(params.max_depth)
            .with_min_samples_split(params.min_samples_split)
            .with_random_state(params.random_state)
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set minimum samples to split
    pub fn with_min_samples_split(mut self, min_samples: usize) -> Self {
        self.min_samples_split = min_samples;
        self
    }

    /// Set minimum samples in leaf
    pub fn with_min_samples_leaf(mut self, min_samples: usize) -> Self {
        self.min_samples_leaf = min_samples;
        self
    }

    /// Set the base random seed
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Fit the forest. Labels are class indices encoded as f64.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.len() {
            return Err(TrainError::Shape {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(TrainError::Data(
                "cannot fit a forest on zero rows".to_string(),
            ));
        }

        self.n_features = n_features;
        let max_features = ((n_features as f64).sqrt().ceil() as usize).max(1);

        let trees: std::result::Result<Vec<DecisionTree>, TrainError> = (0..self.n_estimators)
            .into_par_iter()
            .map(|tree_idx| {
                let seed = self.random_state.wrapping_add(tree_idx as u64);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);

                // Bootstrap sample with replacement
                let sample_indices: Vec<usize> = (0..n_samples)
                    .map(|_| (rng.next_u64() as usize) % n_samples)
                    .collect();

                let x_boot = x.select(Axis(0), &sample_indices);
                let y_boot: Array1<f64> =
                    Array1::from_iter(sample_indices.iter().map(|&i| y[i]));

                let mut tree = DecisionTree::new()
                    .with_min_samples_split(self.min_samples_split)
                    .with_min_samples_leaf(self.min_samples_leaf)
                    .with_max_features(max_features)
                    .with_seed(seed);
                if let Some(depth) = self.max_depth {
                    tree = tree.with_max_depth(depth);
                }

                tree.fit(&x_boot, &y_boot)?;
                Ok(tree)
            })
            .collect();

        self.trees = trees?;
        Ok(self)
    }

    /// Predict by majority vote across the trees. Ties break toward the
    /// smallest class index, keeping predictions deterministic.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if self.trees.is_empty() {
            return Err(TrainError::NotFitted);
        }

        let all_predictions: Vec<Array1<f64>> = self
            .trees
            .par_iter()
            .map(|tree| tree.predict(x))
            .collect::<Result<Vec<_>>>()?;

        let predictions: Vec<f64> = (0..x.nrows())
            .map(|i| {
                let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
                for preds in &all_predictions {
                    *votes.entry(preds[i].round() as i64).or_insert(0) += 1;
                }
                votes
                    .into_iter()
                    .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
                    .map(|(class, _)| class as f64)
                    .unwrap_or(0.0)
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }

    /// Number of fitted trees
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
