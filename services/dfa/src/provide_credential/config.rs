use std::sync::Arc;

use async_trait::async_trait;
use tripsign_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        // Fall back to the environment for fields the config leaves unset.
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(key), Some(secret)) = (&config.api_key, &config.api_secret) {
            return Ok(Some(Credential::new(key.clone(), secret.clone())));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_config_credential_provider_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        temp_env::with_vars(
            vec![
                (DFA_API_KEY, Some("api_key_from_env")),
                (DFA_API_SECRET, Some("api_secret_from_env")),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new();
                    let config = Arc::new(Config::default());
                    let loader = ConfigCredentialProvider::new(config);

                    let cred = loader
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed")
                        .expect("credential must be found");
                    assert_eq!("api_key_from_env", cred.api_key);
                    assert_eq!("api_secret_from_env", cred.api_secret);
                })
            },
        );
    }

    #[test]
    fn test_config_credential_provider_prefers_explicit_values() {
        temp_env::with_vars(
            vec![
                (DFA_API_KEY, Some("api_key_from_env")),
                (DFA_API_SECRET, Some("api_secret_from_env")),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new();
                    let config = Arc::new(
                        Config::new()
                            .with_api_key("explicit_key")
                            .with_api_secret("explicit_secret"),
                    );
                    let loader = ConfigCredentialProvider::new(config);

                    let cred = loader
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed")
                        .expect("credential must be found");
                    assert_eq!("explicit_key", cred.api_key);
                    assert_eq!("explicit_secret", cred.api_secret);
                })
            },
        );
    }
}
