//! Defines the `Warehouse` trait, the boundary to the trade store scored
//! by the offline component.

use crate::model::trade::{LabeledTrade, TradeRecord};
use anyhow::Result;

/// A store holding accumulated trade batches.
///
/// Query semantics are the implementor's concern; the contract is only
/// "give me the most recent batch" and "accept labeled rows for a table".
pub trait Warehouse {
    /// Returns the rows of the most recently generated batch.
    fn latest_trades(&mut self) -> Result<Vec<TradeRecord>>;

    /// Writes labeled rows under the given table name.
    fn write_rows(&mut self, table: &str, rows: &[LabeledTrade]) -> Result<()>;
}
