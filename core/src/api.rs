use crate::{Context, Result};
use std::fmt::{self, Debug};

/// SigningCredential is the trait for the key material a signer holds.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check whether the credential is still usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential loads key material from the environment.
///
/// Different gateways need different key material; the Digital for
/// Airlines gateway needs an API key and a shared secret.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load the credential, returning `None` when this source has nothing.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest computes and attaches the signature for one request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential consumed by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request parts in place.
    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// A chain of credential providers that will be tried in order.
///
/// The first provider that yields a credential wins; providers that fail
/// are logged and skipped.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug)]
    struct StaticProvider(&'static str);

    #[async_trait::async_trait]
    impl ProvideCredential for StaticProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[derive(Debug)]
    struct EmptyProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for EmptyProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for FailingProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Err(Error::unexpected("this provider always fails"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() {
        let ctx = Context::default();

        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(EmptyProvider)
            .push(StaticProvider("first"))
            .push(StaticProvider("second"));

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert_eq!(cred.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_chain_push_front_takes_priority() {
        let ctx = Context::default();

        let chain = ProvideCredentialChain::new()
            .push(StaticProvider("base"))
            .push_front(StaticProvider("override"));

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert_eq!(cred.as_deref(), Some("override"));
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let ctx = Context::default();
        let chain: ProvideCredentialChain<String> = ProvideCredentialChain::new();

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_chain_survives_failing_providers() {
        let ctx = Context::default();

        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(FailingProvider);
        assert!(chain.provide_credential(&ctx).await.unwrap().is_none());
    }
}
