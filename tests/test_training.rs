//! Integration test: training primitives on synthetic data

use kelayakan_train::config::ForestParams;
use kelayakan_train::data::train_test_split;
use kelayakan_train::training::{accuracy, ClassificationReport, RandomForestClassifier};
use ndarray::{Array1, Array2};

/// Two well-separated classes with deterministic jitter.
fn blobs(n: usize) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_fn((n, 4), |(i, j)| {
        let class = (i % 2) as f64;
        let jitter = ((i * (j + 2) * 31) % 50) as f64 / 100.0;
        class * 2.0 + jitter
    });
    let y = Array1::from_iter((0..n).map(|i| (i % 2) as f64));
    (x, y)
}

#[test]
fn test_partition_sizes_match_ratio() {
    let (x, y) = blobs(1000);
    let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, 42).unwrap();

    assert_eq!(x_test.nrows(), 200);
    assert_eq!(x_train.nrows(), 800);
    assert_eq!(y_test.len(), 200);
    assert_eq!(y_train.len(), 800);
}

#[test]
fn test_partition_is_reproducible_across_calls() {
    let (x, y) = blobs(300);

    let (a_train, a_test, a_ytr, a_yte) = train_test_split(&x, &y, 0.2, 42).unwrap();
    let (b_train, b_test, b_ytr, b_yte) = train_test_split(&x, &y, 0.2, 42).unwrap();

    assert_eq!(a_train, b_train);
    assert_eq!(a_test, b_test);
    assert_eq!(a_ytr, b_ytr);
    assert_eq!(a_yte, b_yte);
}

#[test]
fn test_different_seeds_give_different_partitions() {
    let (x, y) = blobs(300);

    let (a_train, _, _, _) = train_test_split(&x, &y, 0.2, 42).unwrap();
    let (b_train, _, _, _) = train_test_split(&x, &y, 0.2, 7).unwrap();
    assert_ne!(a_train, b_train);
}

#[test]
fn test_forest_with_ci_hyperparameters() {
    let (x, y) = blobs(500);
    let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, 42).unwrap();

    let mut model = RandomForestClassifier::from_params(&ForestParams::default());
    model.fit(&x_train, &y_train).unwrap();
    assert_eq!(model.n_trees(), 50);

    let y_pred = model.predict(&x_test).unwrap();
    let acc = accuracy(&y_test, &y_pred);
    assert!(acc > 0.9, "separable blobs should be easy: {}", acc);
}

#[test]
fn test_fit_evaluate_is_bit_for_bit_deterministic() {
    let (x, y) = blobs(400);
    let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, 42).unwrap();

    let mut run_once = || {
        let mut model = RandomForestClassifier::from_params(&ForestParams::default());
        model.fit(&x_train, &y_train).unwrap();
        let y_pred = model.predict(&x_test).unwrap();
        accuracy(&y_test, &y_pred)
    };

    assert_eq!(run_once().to_bits(), run_once().to_bits());
}

#[test]
fn test_classification_report_on_forest_output() {
    let (x, y) = blobs(200);
    let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, 42).unwrap();

    let mut model = RandomForestClassifier::from_params(&ForestParams::default());
    model.fit(&x_train, &y_train).unwrap();
    let y_pred = model.predict(&x_test).unwrap();

    let report = ClassificationReport::compute(&y_test, &y_pred);
    assert_eq!(report.n_samples, 40);
    assert!(report.accuracy > 0.9);
    assert!(report.f1_score > 0.9);
}
