//! Core components for signing booking gateway requests.
//!
//! This crate provides the foundational pieces for the tripsign ecosystem:
//! the digest primitive behind every signature and the abstractions that
//! connect credentials to outgoing requests.
//!
//! ## Overview
//!
//! - **hash**: a from-scratch SHA-256 pipeline producing the hex tokens the
//!   gateways expect
//! - **Context**: a container holding the environment access used during
//!   credential loading
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and request signing ([`SignRequest`])
//! - **Signer**: the orchestrator that coordinates credential loading and
//!   request signing
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use tripsign_core::{
//!     Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//! };
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-api-key".to_string(),
//!             secret: "my-api-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _parts: &mut http::request::Parts,
//!         _credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         // Build your signature here, e.g. with tripsign_core::hash.
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::builder()
//!     .method("POST")
//!     .uri("https://proxy.example.com/v2/shopping/carts")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod sha256;

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};

mod signer;
pub use signer::Signer;
