//! Gini decision tree classifier

use crate::error::{Result, TrainError};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decision tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf with the majority class
    Leaf { class: f64, n_samples: usize },
    /// Internal node with a threshold split
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// CART-style classification tree with Gini impurity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Option<TreeNode>,
    /// Maximum depth
    pub max_depth: Option<usize>,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    /// Features considered per split (all when None)
    pub max_features: Option<usize>,
    /// Seed for per-split feature subsampling
    pub seed: u64,
    n_features: usize,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            seed: 0,
            n_features: 0,
        }
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

    /// Limit the number of features considered per split
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Seed the per-split feature subsampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit the tree to training data. Labels are expected to be class
    /// indices encoded as f64.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();

        if n_samples != y.len() {
            return Err(TrainError::Shape {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(TrainError::Data("cannot fit a tree on zero rows".to_string()));
        }

        self.n_features = x.ncols();

        let indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.root = Some(self.build_tree(x, y, &indices, 0, &mut rng));

        Ok(self)
    }

    fn build_tree(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        indices: &[usize],
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> TreeNode {
        let n_samples = indices.len();
        let y_subset: Vec<f64> = indices.iter().map(|&i| y[i]).collect();

        let should_stop = n_samples < self.min_samples_split
            || self.max_depth.map_or(false, |d| depth >= d)
            || is_pure(&y_subset);

        if should_stop {
            return TreeNode::Leaf {
                class: majority_class(&y_subset),
                n_samples,
            };
        }

        if let Some((feature_idx, threshold)) = self.find_best_split(x, y, indices, rng) {
            let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| x[[i, feature_idx]] <= threshold);

            if left_indices.len() < self.min_samples_leaf
                || right_indices.len() < self.min_samples_leaf
            {
                return TreeNode::Leaf {
                    class: majority_class(&y_subset),
                    n_samples,
                };
            }

            let left = Box::new(self.build_tree(x, y, &left_indices, depth + 1, rng));
            let right = Box::new(self.build_tree(x, y, &right_indices, depth + 1, rng));

            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
            }
        } else {
            TreeNode::Leaf {
                class: majority_class(&y_subset),
                n_samples,
            }
        }
    }

    fn find_best_split(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        indices: &[usize],
        rng: &mut ChaCha8Rng,
    ) -> Option<(usize, f64)> {
        let n_features = x.ncols();
        let candidate_features: Vec<usize> = match self.max_features {
            Some(k) if k < n_features => rand::seq::index::sample(rng, n_features, k).into_vec(),
            _ => (0..n_features).collect(),
        };

        let y_subset: Vec<f64> = indices.iter().map(|&i| y[i]).collect();
        let parent_impurity = gini(&class_counts(&y_subset), indices.len());

        let mut best_gain = 0.0f64;
        let mut best: Option<(usize, f64)> = None;

        for &feature_idx in &candidate_features {
            let mut values: Vec<f64> = indices.iter().map(|&i| x[[i, feature_idx]]).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let mut left_counts: BTreeMap<i64, usize> = BTreeMap::new();
                let mut right_counts: BTreeMap<i64, usize> = BTreeMap::new();
                let mut left_n = 0usize;
                let mut right_n = 0usize;

                for &idx in indices {
                    let class = y[idx].round() as i64;
                    if x[[idx, feature_idx]] <= threshold {
                        *left_counts.entry(class).or_insert(0) += 1;
                        left_n += 1;
                    } else {
                        *right_counts.entry(class).or_insert(0) += 1;
                        right_n += 1;
                    }
                }

                if left_n < self.min_samples_leaf || right_n < self.min_samples_leaf {
                    continue;
                }

                let n = indices.len() as f64;
                let weighted = (left_n as f64 * gini(&left_counts, left_n)
                    + right_n as f64 * gini(&right_counts, right_n))
                    / n;

                let gain = parent_impurity - weighted;
                if gain > best_gain {
                    best_gain = gain;
                    best = Some((feature_idx, threshold));
                }
            }
        }

        best
    }

    /// Predict class indices for each row.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let root = self.root.as_ref().ok_or(TrainError::NotFitted)?;

        if x.ncols() != self.n_features {
            return Err(TrainError::Shape {
                expected: format!("{} features", self.n_features),
                actual: format!("{} features", x.ncols()),
            });
        }

        let predictions: Vec<f64> = (0..x.nrows())
            .map(|i| {
                let mut node = root;
                loop {
                    match node {
                        TreeNode::Leaf { class, .. } => return *class,
                        TreeNode::Split {
                            feature_idx,
                            threshold,
                            left,
                            right,
                        } => {
                            node = if x[[i, *feature_idx]] <= *threshold {
                                left
                            } else {
                                right
                            };
                        }
                    }
                }
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }
}

fn class_counts(labels: &[f64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &label in labels {
        *counts.entry(label.round() as i64).or_insert(0) += 1;
    }
    counts
}

fn gini(counts: &BTreeMap<i64, usize>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - counts
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum::<f64>()
}

fn is_pure(labels: &[f64]) -> bool {
    labels
        .windows(2)
        .all(|w| (w[0] - w[1]).abs() < f64::EPSILON)
}

/// Majority class; ties break toward the smallest class index so the
/// result never depends on map iteration order.
fn majority_class(labels: &[f64]) -> f64 {
    class_counts(labels)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(class, _)| class as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_separable_classes() {
        let x = array![
            [0.0, 0.0],
            [0.1, 0.1],
            [0.2, 0.2],
            [1.0, 1.0],
            [1.1, 1.1],
            [1.2, 1.2],
        ];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let mut tree = DecisionTree::new().with_max_depth(3);
        tree.fit(&x, &y).unwrap();

        let predictions = tree.predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_pure_labels_give_single_leaf() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![1.0, 1.0, 1.0];

        let mut tree = DecisionTree::new();
        tree.fit(&x, &y).unwrap();

        let predictions = tree.predict(&x).unwrap();
        assert!(predictions.iter().all(|&p| p == 1.0));
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let tree = DecisionTree::new();
        let x = array![[1.0]];
        assert!(matches!(tree.predict(&x), Err(TrainError::NotFitted)));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0];
        let mut tree = DecisionTree::new();
        assert!(tree.fit(&x, &y).is_err());
    }

    #[test]
    fn test_majority_class_tie_breaks_low() {
        assert_eq!(majority_class(&[0.0, 1.0]), 0.0);
        assert_eq!(majority_class(&[2.0, 1.0, 2.0]), 2.0);
    }
}
