//! Dataset loading and partitioning
//!
//! The dataset is read fully into memory before anything else runs; the
//! pipeline never streams.

use crate::error::{Result, TrainError};
use ndarray::{Array1, Array2, Axis};
use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Load a header CSV into a DataFrame.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Split a loaded table into a feature matrix and an encoded label vector.
///
/// Every column except `target` becomes a feature. The target may be
/// categorical; its values are factorized to class indices over the sorted
/// unique values, so accuracy downstream is invariant to the encoding.
pub fn split_features(
    df: &DataFrame,
    target: &str,
) -> Result<(Array2<f64>, Array1<f64>, Vec<String>)> {
    let feature_cols: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != target)
        .map(|s| s.to_string())
        .collect();

    let target_col = df
        .column(target)
        .map_err(|_| TrainError::ColumnNotFound(target.to_string()))?;
    let y = encode_labels(target_col)?;
    let x = columns_to_array2(df, &feature_cols)?;

    if x.nrows() != y.len() {
        return Err(TrainError::Shape {
            expected: format!("{} label rows", x.nrows()),
            actual: format!("{} label rows", y.len()),
        });
    }

    Ok((x, y, feature_cols))
}

/// Factorize a (possibly categorical) column into f64 class indices.
fn encode_labels(col: &Column) -> Result<Array1<f64>> {
    let as_str = col
        .cast(&DataType::String)
        .map_err(|e| TrainError::Data(e.to_string()))?;
    let values: Vec<String> = as_str
        .str()
        .map_err(|e| TrainError::Data(e.to_string()))?
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect();

    let mut classes: Vec<String> = values.clone();
    classes.sort();
    classes.dedup();

    let encoded: Vec<f64> = values
        .iter()
        .map(|v| classes.iter().position(|c| c == v).unwrap_or(0) as f64)
        .collect();

    Ok(Array1::from_vec(encoded))
}

/// Extract named columns into a row-major `Array2<f64>`, casting each to
/// Float64 on the way.
fn columns_to_array2(df: &DataFrame, col_names: &[String]) -> Result<Array2<f64>> {
    let n_rows = df.height();
    let n_cols = col_names.len();

    let col_data: Vec<Vec<f64>> = col_names
        .iter()
        .map(|col_name| {
            let col = df
                .column(col_name)
                .map_err(|_| TrainError::ColumnNotFound(col_name.clone()))?;
            let col_f64 = col
                .cast(&DataType::Float64)
                .map_err(|e| TrainError::Data(e.to_string()))?;
            let values: Vec<f64> = col_f64
                .f64()
                .map_err(|e| TrainError::Data(e.to_string()))?
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect();
            Ok(values)
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    Ok(Array2::from_shape_fn((n_rows, n_cols), |(r, c)| {
        col_data[c][r]
    }))
}

/// Deterministic shuffled train/test partition.
///
/// |test| = round(ratio × n); the partitions are disjoint and exhaustive,
/// and the same seed and input always produce the same split.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_ratio: f64,
    seed: u64,
) -> Result<(Array2<f64>, Array2<f64>, Array1<f64>, Array1<f64>)> {
    let n = x.nrows();
    if n != y.len() {
        return Err(TrainError::Shape {
            expected: format!("y length = {}", n),
            actual: format!("y length = {}", y.len()),
        });
    }

    let n_test = ((n as f64) * test_ratio).round() as usize;
    if n_test == 0 || n_test >= n {
        return Err(TrainError::Data(format!(
            "test split of {} rows out of {} leaves nothing to train on",
            n_test, n
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let x_train = x.select(Axis(0), train_idx);
    let x_test = x.select(Axis(0), test_idx);
    let y_train = Array1::from_iter(train_idx.iter().map(|&i| y[i]));
    let y_test = Array1::from_iter(test_idx.iter().map(|&i| y[i]));

    Ok((x_train, x_test, y_train, y_test))
}
