//! Delivery outcome model.

/// Outcome of one delivery attempt.
///
/// Sinks report failure through this struct instead of raising past their
/// boundary; the simulation loop decides whether to halt or continue.
#[derive(Debug, Clone)]
pub struct SinkResult {
    /// Whether the batch was durably persisted.
    pub delivered: bool,
    /// Where the batch went (file path or object key).
    pub destination: String,
    /// Human-readable cause, populated on failure.
    pub cause: Option<String>,
}

impl SinkResult {
    pub fn success(destination: impl Into<String>) -> Self {
        Self {
            delivered: true,
            destination: destination.into(),
            cause: None,
        }
    }

    pub fn failure(destination: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            delivered: false,
            destination: destination.into(),
            cause: Some(cause.into()),
        }
    }
}
