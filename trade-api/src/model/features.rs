//! Feature matrix handed across the model boundary.

use serde::{Deserialize, Serialize};

/// A column-major matrix of numeric features.
///
/// Missing values are represented as `NaN` until
/// [`fill_missing_with_mean`](FeatureMatrix::fill_missing_with_mean) is
/// applied; models are fed fully populated matrices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureMatrix {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Creates an empty matrix with the given feature names.
    pub fn new(names: Vec<String>) -> Self {
        let columns = names.iter().map(|_| Vec::new()).collect();
        Self { names, columns }
    }

    /// Appends one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` does not have one value per feature.
    pub fn push_row(&mut self, row: &[f64]) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row arity must match feature count"
        );
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(*value);
        }
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn n_features(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    /// Replaces every `NaN` with the mean of its column's present values.
    ///
    /// A column with no present values at all is filled with zeros.
    pub fn fill_missing_with_mean(&mut self) {
        for column in &mut self.columns {
            let present: Vec<f64> = column.iter().copied().filter(|v| !v.is_nan()).collect();
            let mean = if present.is_empty() {
                0.0
            } else {
                present.iter().sum::<f64>() / present.len() as f64
            };
            for value in column.iter_mut() {
                if value.is_nan() {
                    *value = mean;
                }
            }
        }
    }
}
