use async_trait::async_trait;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::app::ports::{ObjectStorePort, PutObject};
use crate::config::MirrorConfig;
use crate::error::{MirrorError, Result};

/// S3 writer for mirrored payloads.
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Load the ambient AWS configuration (environment, profile, container or
    /// instance credentials) and force the configured region onto it.
    ///
    /// Credentials are resolved once here so a broken chain fails at cold
    /// start instead of on the first write.
    pub async fn connect(config: &MirrorConfig) -> Result<Self> {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| MirrorError::Config("no AWS credentials provider available".to_string()))?;
        verify_credentials(&provider).await?;
        Ok(Self { client: Client::new(&sdk_config) })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Resolve credentials from `provider`, mapping any failure to a config error
pub async fn verify_credentials(provider: &impl ProvideCredentials) -> Result<()> {
    provider
        .provide_credentials()
        .await
        .map(|_| ())
        .map_err(|e| MirrorError::Config(format!("AWS credentials unavailable: {}", DisplayErrorContext(&e))))
}

#[async_trait]
impl ObjectStorePort for S3ObjectStore {
    async fn put_object(&self, object: PutObject) -> Result<()> {
        self.client
            .put_object()
            .bucket(object.bucket)
            .key(object.key)
            .body(ByteStream::from(object.body))
            .send()
            .await
            .map_err(|e| MirrorError::Upload(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
