//! Test case loading utilities for integration tests.
//!
//! For assertion helpers and synthetic data, use `linreg_descent::testing`.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Base directory for test cases.
pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases")
}

/// Load a JSON file and deserialize it.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let file =
        File::open(path).unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// Reference descent run with known final parameters.
#[derive(Debug, Deserialize)]
pub struct ReferenceCase {
    pub description: String,
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
    pub w_in: Vec<f64>,
    pub b_in: f64,
    pub alpha: f64,
    pub num_iters: usize,
    pub expected: Expected,
}

#[derive(Debug, Deserialize)]
pub struct Expected {
    pub w: Vec<f64>,
    pub b: f64,
    pub tolerance: f64,
    #[serde(default)]
    pub first_cost: Option<f64>,
    #[serde(default)]
    pub final_cost: Option<f64>,
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
}

impl ReferenceCase {
    pub fn load(name: &str) -> Self {
        load_json(&test_cases_dir().join("reference").join(format!("{name}.json")))
    }

    /// Feature matrix with one row per example.
    pub fn x(&self) -> Array2<f64> {
        let n_rows = self.features.len();
        let n_features = self.features.first().map_or(0, Vec::len);
        let flat: Vec<f64> = self.features.iter().flatten().copied().collect();
        Array2::from_shape_vec((n_rows, n_features), flat).expect("rectangular features")
    }

    /// First feature column, for single-feature cases.
    pub fn x_column(&self) -> Array1<f64> {
        self.features.iter().map(|row| row[0]).collect()
    }

    pub fn y(&self) -> Array1<f64> {
        Array1::from(self.targets.clone())
    }

    pub fn w_in(&self) -> Array1<f64> {
        Array1::from(self.w_in.clone())
    }
}
