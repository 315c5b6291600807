//! Digital for Airlines request signer.

use async_trait::async_trait;
use http::header::HeaderName;
use http::HeaderValue;
use log::debug;
use tripsign_core::hash::hex_sha256_text;
use tripsign_core::time::{now, unix_seconds, DateTime};
use tripsign_core::utils::Redact;
use tripsign_core::{Context, Error, Result, SignRequest};

use crate::constants::*;
use crate::credential::Credential;

/// Signature token for one request.
///
/// SHA-256 over the exact concatenation of the API key, the shared secret
/// and the Unix timestamp in whole seconds, with no separators. This is
/// the gateway's historical scheme, reproduced byte-for-byte for wire
/// compatibility.
///
/// # Warning
///
/// The scheme is not an HMAC and carries no per-request nonce beyond the
/// one-second timestamp. Treat it as request plumbing required by the
/// gateway, not as a security control.
pub fn signature_for(api_key: &str, api_secret: &str, timestamp: i64) -> Result<String> {
    hex_sha256_text(&format!("{api_key}{api_secret}{timestamp}"))
}

/// RequestSigner that implements the Digital for Airlines header scheme.
///
/// The API key goes out under `x-api-key` and the signature token under
/// `x-api-signature`; the upstream gateway recomputes the token on its
/// side from the same three inputs.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let timestamp = unix_seconds(self.time.unwrap_or_else(now));
        let signature = signature_for(&cred.api_key, &cred.api_secret, timestamp)?;
        debug!(
            "built signature for key {:?} at {timestamp}",
            Redact::from(&cred.api_key)
        );

        parts
            .headers
            .insert(HeaderName::from_static(X_API_KEY), cred.api_key.parse()?);
        parts.headers.insert(HeaderName::from_static(X_API_SIGNATURE), {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }
}
