pub mod model;
pub mod traits;

pub use model::batch::{AnomalyReport, TradeBatch};
pub use model::delivery::SinkResult;
pub use model::features::FeatureMatrix;
pub use model::trade::{LabeledTrade, TradeRecord, SCHEMA_COLUMNS};
pub use traits::outlier::{OutlierModel, ANOMALY, NORMAL};
pub use traits::sink::Sink;
pub use traits::warehouse::Warehouse;
