use crate::{constants::*, Credential};
use async_trait::async_trait;
use tripsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads gateway credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `DFA_API_KEY`: the API key identifying the calling application
/// - `DFA_API_SECRET`: the shared secret
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(DFA_API_KEY), envs.get(DFA_API_SECRET)) {
            (Some(key), Some(secret)) => Ok(Some(Credential {
                api_key: key.clone(),
                api_secret: secret.clone(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tripsign_core::StaticEnv;

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let envs = HashMap::from([
            (DFA_API_KEY.to_string(), "test_api_key".to_string()),
            (DFA_API_SECRET.to_string(), "test_api_secret".to_string()),
        ]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());
        let cred = cred.unwrap();
        assert_eq!(cred.api_key, "test_api_key");
        assert_eq!(cred.api_secret, "test_api_secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> Result<()> {
        // Only the API key, no secret.
        let envs = HashMap::from([(DFA_API_KEY.to_string(), "test_api_key".to_string())]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
