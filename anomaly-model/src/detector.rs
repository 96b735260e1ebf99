//! The bundled one-class detector.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use trades::{FeatureMatrix, OutlierModel, ANOMALY, NORMAL};

/// Default fraction of training rows treated as outliers.
pub const DEFAULT_CONTAMINATION: f64 = 0.01;

/// One-class outlier detector.
///
/// Standardizes each feature against the training distribution and scores
/// a row by its largest absolute z-score; the decision threshold is placed
/// so that roughly `contamination` of the training rows score above it.
/// Everything downstream only depends on the [`OutlierModel`] trait, so
/// the algorithm is an interchangeable detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreDetector {
    contamination: f64,
    means: Vec<f64>,
    stds: Vec<f64>,
    threshold: f64,
    fitted: bool,
}

impl ZScoreDetector {
    pub fn new(contamination: f64) -> Self {
        Self {
            contamination,
            means: Vec::new(),
            stds: Vec::new(),
            threshold: 0.0,
            fitted: false,
        }
    }

    fn score_rows(&self, features: &FeatureMatrix) -> Vec<f64> {
        let mut scores = vec![0.0_f64; features.n_rows()];
        for feature in 0..features.n_features() {
            let mean = self.means[feature];
            let std = self.stds[feature];
            for (row, value) in features.column(feature).iter().enumerate() {
                let z = ((value - mean) / std).abs();
                if z > scores[row] {
                    scores[row] = z;
                }
            }
        }
        scores
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAMINATION)
    }
}

impl OutlierModel for ZScoreDetector {
    fn fit(&mut self, features: &FeatureMatrix) -> Result<()> {
        let n = features.n_rows();
        if n == 0 {
            bail!("cannot fit on an empty feature matrix");
        }

        self.means.clear();
        self.stds.clear();
        for feature in 0..features.n_features() {
            let column = features.column(feature);
            let mean = column.iter().sum::<f64>() / n as f64;
            let variance =
                column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
            let std = variance.sqrt();
            self.means.push(mean);
            // A constant feature carries no spread; unit scale keeps its
            // z-scores at zero instead of dividing by zero.
            self.stds.push(if std > 0.0 { std } else { 1.0 });
        }

        let mut scores = self.score_rows(features);
        scores.sort_by(|a, b| a.total_cmp(b));
        let cut = ((self.contamination * n as f64).floor() as usize).min(n - 1);
        self.threshold = scores[n - 1 - cut];
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<i8>> {
        if !self.fitted {
            bail!("model has not been fitted");
        }
        if features.n_features() != self.means.len() {
            bail!(
                "feature arity mismatch: fitted on {}, given {}",
                self.means.len(),
                features.n_features()
            );
        }
        Ok(self
            .score_rows(features)
            .into_iter()
            .map(|score| if score > self.threshold { ANOMALY } else { NORMAL })
            .collect())
    }
}
