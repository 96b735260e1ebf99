//! Defines the `OutlierModel` trait, the boundary to the one-class
//! classifier.
//!
//! The algorithm behind this trait is deliberately unspecified: it trains
//! on a feature matrix and later labels rows as anomalous or normal.

use crate::model::features::FeatureMatrix;
use anyhow::Result;

/// Label for a row the model considers anomalous.
pub const ANOMALY: i8 = -1;
/// Label for a row the model considers normal.
pub const NORMAL: i8 = 1;

/// A one-class outlier classifier.
pub trait OutlierModel {
    /// Fits the model on a fully populated feature matrix.
    fn fit(&mut self, features: &FeatureMatrix) -> Result<()>;

    /// Labels every row of `features`.
    ///
    /// # Returns
    ///
    /// One label per row: [`ANOMALY`] or [`NORMAL`].
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<i8>>;
}
