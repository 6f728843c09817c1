//! Evaluation metrics

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Fraction of predictions matching the true labels, in [0, 1].
pub fn accuracy(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| (*t - *p).abs() < 0.5)
        .count();
    correct as f64 / y_true.len() as f64
}

/// Classification metrics on a held-out partition.
///
/// Precision/recall/F1 treat class 1 as the positive class, which matches
/// the binary eligibility target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub n_samples: usize,
}

impl ClassificationReport {
    pub fn compute(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Self {
        let (tp, fp, _tn, fn_) = confusion_counts(y_true, y_pred);

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            accuracy: accuracy(y_true, y_pred),
            precision,
            recall,
            f1_score,
            n_samples: y_true.len(),
        }
    }
}

fn confusion_counts(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> (usize, usize, usize, usize) {
    let mut tp = 0;
    let mut fp = 0;
    let mut tn = 0;
    let mut fn_ = 0;

    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        match (*t > 0.5, *p > 0.5) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (false, false) => tn += 1,
            (true, false) => fn_ += 1,
        }
    }

    (tp, fp, tn, fn_)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy() {
        let y_true = array![1.0, 0.0, 1.0, 1.0];
        let y_pred = array![1.0, 0.0, 0.0, 1.0];
        assert!((accuracy(&y_true, &y_pred) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_empty() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(accuracy(&empty, &empty), 0.0);
    }

    #[test]
    fn test_report() {
        let y_true = array![1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let y_pred = array![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred);
        assert!((report.accuracy - 0.75).abs() < 1e-12);
        assert!((report.precision - 0.75).abs() < 1e-12);
        assert!((report.recall - 0.75).abs() < 1e-12);
        assert!((report.f1_score - 0.75).abs() < 1e-12);
        assert_eq!(report.n_samples, 8);
    }
}
