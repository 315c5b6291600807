use crate::Credential;
use async_trait::async_trait;
use tripsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed API key and shared secret.
///
/// This provider is used when you already hold the key material and want
/// to use it without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    api_key: String,
    api_secret: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with an API key and shared secret.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
        }))
    }
}
