use crate::errors::CatalogError;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrock::config::Credentials;
use aws_sdk_bedrock::Client;
use catalog_core::config::CatalogConfig;
use catalog_core::AwsEnvCredentials;
use std::time::Duration;
use tracing::info;

/// Builds a Bedrock control-plane client from the three environment-supplied
/// credential values. Fails before any network activity when a variable is
/// missing. Every operation on the client carries a bounded timeout; one
/// handle per call, no pooling.
pub async fn build_catalog_client(config: &CatalogConfig) -> Result<Client, CatalogError> {
    let credentials = AwsEnvCredentials::from_env()?;
    info!(
        "creating Bedrock catalog client for region {}",
        credentials.region
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(Credentials::new(
            credentials.access_key,
            credentials.secret_key,
            None,
            None,
            "environment",
        ))
        .region(Region::new(credentials.region))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(Duration::from_secs(config.timeout_secs))
                .build(),
        )
        .load()
        .await;

    Ok(Client::new(&sdk_config))
}
