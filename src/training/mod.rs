//! Classifier training
//!
//! Classification-only tree models: a Gini decision tree and the bagged
//! random forest built on top of it, plus the evaluation metrics.

pub mod decision_tree;
pub mod metrics;
pub mod random_forest;

pub use decision_tree::{DecisionTree, TreeNode};
pub use metrics::{accuracy, ClassificationReport};
pub use random_forest::RandomForestClassifier;
