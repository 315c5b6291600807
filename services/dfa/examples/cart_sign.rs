use tripsign_core::{Context, ProvideCredentialChain, Result, Signer};
use tripsign_dfa::{EnvCredentialProvider, RequestSigner, StaticCredentialProvider};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Credentials come from DFA_API_KEY / DFA_API_SECRET when present,
    // demo values otherwise.
    let loader = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new(
            "demo-api-key",
            "demo-api-secret",
        ));

    let signer = Signer::new(Context::new(), loader, RequestSigner::new());

    // Create a request to sign
    let mut parts = http::Request::builder()
        .method("POST")
        .uri("https://proxy.digitalforairlines.com/v2/shopping/carts")
        .body(())
        .unwrap()
        .into_parts()
        .0;

    signer.sign(&mut parts).await?;

    println!("Request signed successfully!");
    println!("x-api-key: {:?}", parts.headers.get("x-api-key").unwrap());
    println!(
        "x-api-signature: {:?}",
        parts.headers.get("x-api-signature").unwrap()
    );

    Ok(())
}
