use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration.
///
/// Every flag falls back to the environment variable the deployment sets,
/// so the binary can run unchanged under a process manager that only
/// injects an environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file holding the base trade data sampled into every batch
    #[arg(long, env = "LOCAL_CSV_PATH", default_value = "./trades_data.csv")]
    pub base_csv: PathBuf,

    /// Directory receiving the generated CSV files
    #[arg(long, env = "LOCAL_CSV_OUTPUT_PATH", default_value = "./output")]
    pub output_dir: PathBuf,

    /// Delivery mode: "local" writes CSV files only, "remote" additionally
    /// uploads each file to S3 ("s3" is accepted as an alias)
    #[arg(long, env = "MODE", default_value = "local")]
    pub mode: String,

    /// S3 bucket receiving the generated files (remote mode)
    #[arg(long, env = "S3_BUCKET")]
    pub s3_bucket: Option<String>,

    /// AWS region of the bucket (remote mode)
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub aws_region: String,

    /// AWS access key id (remote mode)
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub aws_access_key_id: Option<String>,

    /// AWS secret access key (remote mode)
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,
}

/// Where batches go, resolved from the raw arguments exactly once at
/// startup. The loop never re-inspects the mode string.
#[derive(Debug, Clone)]
pub enum SinkConfig {
    Local {
        output_dir: PathBuf,
    },
    Remote {
        output_dir: PathBuf,
        bucket: String,
        region: String,
        access_key_id: String,
        secret_access_key: String,
    },
}

impl Args {
    /// Validates the sink-related settings.
    ///
    /// # Returns
    ///
    /// * `Ok(SinkConfig)` when the mode is recognized and every setting it
    ///   requires is present.
    /// * `Err(ConfigError)` on an unknown mode or a missing remote setting.
    pub fn sink_config(&self) -> Result<SinkConfig, ConfigError> {
        match self.mode.as_str() {
            "local" => Ok(SinkConfig::Local {
                output_dir: self.output_dir.clone(),
            }),
            "remote" | "s3" => {
                let bucket = self
                    .s3_bucket
                    .clone()
                    .ok_or(ConfigError::MissingRemoteSetting("S3_BUCKET"))?;
                let access_key_id = self
                    .aws_access_key_id
                    .clone()
                    .ok_or(ConfigError::MissingRemoteSetting("AWS_ACCESS_KEY_ID"))?;
                let secret_access_key = self
                    .aws_secret_access_key
                    .clone()
                    .ok_or(ConfigError::MissingRemoteSetting("AWS_SECRET_ACCESS_KEY"))?;
                Ok(SinkConfig::Remote {
                    output_dir: self.output_dir.clone(),
                    bucket,
                    region: self.aws_region.clone(),
                    access_key_id,
                    secret_access_key,
                })
            }
            other => Err(ConfigError::UnsupportedMode(other.to_string())),
        }
    }
}
