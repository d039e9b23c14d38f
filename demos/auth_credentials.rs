//! Example: Authentication helpers and signing.
//!
//! Run with: cargo run --example auth_credentials

use cexio_api_client::auth::{
    Credentials, CredentialsProvider, EnvCredentials, IncreasingNonce, NonceProvider,
    StaticCredentials, sign, sign_request,
};

fn main() {
    // Static credentials (typically used in tests or explicit config).
    let static_creds = StaticCredentials::new("up123456789", "api_key", "api_secret");
    println!("Static user: {}", static_creds.get_credentials().username);

    // Environment credentials are convenient for local dev.
    if let Some(env_creds) = EnvCredentials::try_from_env() {
        println!(
            "Loaded env credentials for {}",
            env_creds.get_credentials().username
        );
    } else {
        println!("Set CEXIO_USERNAME, CEXIO_API_KEY and CEXIO_API_SECRET to load env credentials.");
    }

    // Nonce generation for authenticated requests.
    let nonce = IncreasingNonce::new();
    let next_nonce = nonce.next_nonce();
    println!("Next nonce: {}", next_nonce);

    // Signature for a private command.
    let creds = Credentials::new("up123456789", "api_key", "api_secret");
    println!("Signature: {}", sign_request(&creds, next_nonce));
    println!(
        "Same, from raw parts: {}",
        sign(&next_nonce.to_string(), "up123456789", "api_key", "api_secret")
    );
}
