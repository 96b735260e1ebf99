use crate::sink::local::{write_batch, LocalSink};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use log::{debug, info};
use std::path::Path;
use trades::{Sink, SinkResult, TradeBatch};

/// Writes each batch locally, then uploads the artifact to S3 under a key
/// equal to the file name.
///
/// The local file is retained whether or not the upload succeeds; a local
/// artifact always exists, and retention is the operator's responsibility.
pub struct S3Sink {
    local: LocalSink,
    client: Client,
    bucket: String,
}

impl S3Sink {
    /// Creates the sink from configuration-supplied credentials.
    pub fn new(
        local: LocalSink,
        bucket: String,
        region: String,
        access_key_id: String,
        secret_access_key: String,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "simulator-config",
        );
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region))
            .credentials_provider(credentials)
            .build();
        Self {
            local,
            client: Client::from_conf(config),
            bucket,
        }
    }

    async fn upload(&self, path: &Path, key: &str) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .with_context(|| format!("Failed to read artifact {}", path.display()))?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;
        Ok(())
    }
}

#[async_trait]
impl Sink for S3Sink {
    async fn deliver(&mut self, batch: &TradeBatch) -> SinkResult {
        let filename = LocalSink::filename(batch);
        let path = self.local.path_for(&filename);

        if let Err(e) = write_batch(&path, batch) {
            return SinkResult::failure(path.display().to_string(), format!("{:#}", e));
        }
        debug!("Local artifact retained at {}", path.display());

        let destination = format!("s3://{}/{}", self.bucket, filename);
        match self.upload(&path, &filename).await {
            Ok(()) => {
                info!(
                    "File '{}' uploaded to S3 bucket '{}' with key '{}'",
                    path.display(),
                    self.bucket,
                    filename
                );
                SinkResult::success(destination)
            }
            Err(e) => SinkResult::failure(destination, format!("{:#}", e)),
        }
    }

    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
