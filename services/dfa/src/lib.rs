//! Signers for the Digital for Airlines booking gateway.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::{signature_for, RequestSigner};

mod constants;
