//! Delivery sinks.
//!
//! The sink is selected exactly once at startup from the validated
//! configuration; the simulation loop only ever sees the boxed trait.

mod local;
mod s3;

pub use local::LocalSink;
pub use s3::S3Sink;

use crate::config::SinkConfig;
use crate::error::ConfigError;
use trades::Sink;

/// Builds the sink the configuration selects.
pub fn build(config: &SinkConfig) -> Result<Box<dyn Sink>, ConfigError> {
    match config {
        SinkConfig::Local { output_dir } => {
            Ok(Box::new(LocalSink::new(output_dir.clone())?))
        }
        SinkConfig::Remote {
            output_dir,
            bucket,
            region,
            access_key_id,
            secret_access_key,
        } => {
            let local = LocalSink::new(output_dir.clone())?;
            Ok(Box::new(S3Sink::new(
                local,
                bucket.clone(),
                region.clone(),
                access_key_id.clone(),
                secret_access_key.clone(),
            )))
        }
    }
}
