//! Feature preparation.

use trades::{FeatureMatrix, TradeRecord};

/// Columns the outlier model trains on.
pub const FEATURE_COLUMNS: [&str; 2] = ["price", "size"];

/// Builds the price/size feature matrix from trade rows, filling missing
/// values with the column mean.
pub fn feature_matrix(rows: &[TradeRecord]) -> FeatureMatrix {
    let mut matrix =
        FeatureMatrix::new(FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect());
    for row in rows {
        matrix.push_row(&[row.price, row.size]);
    }
    matrix.fill_missing_with_mean();
    matrix
}
