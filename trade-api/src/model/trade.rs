//! Trade record model.
//!
//! The record layout mirrors the consolidated-tape export the simulator is
//! seeded from. Field order matches the CSV column order, so serializing a
//! record through the `csv` crate reproduces the expected header.

use serde::{Deserialize, Serialize};

/// Column names of the trade schema, in emission order.
pub const SCHEMA_COLUMNS: [&str; 15] = [
    "localTS",
    "localDate",
    "ticker",
    "conditions",
    "correction",
    "exchange",
    "id",
    "participant_timestamp",
    "price",
    "sequence_number",
    "sip_timestamp",
    "size",
    "tape",
    "trf_id",
    "trf_timestamp",
];

/// A single trade event.
///
/// Identity is positional within a batch; there is no stable key. Every
/// field carries `#[serde(default)]` so a base dataset missing a column can
/// still be loaded, with textual fields coerced to empty strings and numeric
/// fields to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Local wall-clock time of generation ("%Y-%m-%d %H:%M:%S").
    #[serde(rename = "localTS", default)]
    pub local_ts: String,
    /// Local date of generation ("%Y-%m-%d").
    #[serde(rename = "localDate", default)]
    pub local_date: String,
    #[serde(default)]
    pub ticker: String,
    /// Free-text condition codes; empty when absent.
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub correction: i64,
    #[serde(default)]
    pub exchange: i64,
    #[serde(default)]
    pub id: String,
    /// Participant timestamp, nanoseconds since the Unix epoch.
    #[serde(default)]
    pub participant_timestamp: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub sequence_number: i64,
    /// SIP timestamp, nanoseconds since the Unix epoch.
    #[serde(default)]
    pub sip_timestamp: i64,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub tape: i64,
    #[serde(default)]
    pub trf_id: i64,
    /// TRF timestamp, nanoseconds since the Unix epoch.
    #[serde(default)]
    pub trf_timestamp: i64,
}

/// A trade record with an outlier verdict attached.
///
/// Serializes to the trade schema plus one trailing `anomaly` column
/// (-1 anomaly, 1 normal), which is the labeled-row shape accepted by
/// [`crate::traits::warehouse::Warehouse::write_rows`].
#[derive(Debug, Clone, Serialize)]
pub struct LabeledTrade {
    #[serde(flatten)]
    pub trade: TradeRecord,
    pub anomaly: i8,
}
