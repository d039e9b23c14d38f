//! Example: Working with CexioError and ApiError.
//!
//! Run with: cargo run --example error_handling

use cexio_api_client::CexioError;
use cexio_api_client::error::{ApiError, error_messages};
use cexio_api_client::rest::CexioClient;
use serde_json::json;

#[tokio::main]
async fn main() {
    // Exchange-side errors are ordinary data in the decoded body.
    let body = json!({ "error": error_messages::INVALID_NONCE });
    if let Some(api_error) = ApiError::from_response(&body) {
        println!("API error: {}", api_error);
        println!("Is invalid nonce: {}", api_error.is_invalid_nonce());
    }

    // Transport errors are returned as `Err`.
    let client = CexioClient::builder().base_url("http://127.0.0.1:9").build();
    match client.ticker("BTC/USD").await {
        Ok(value) => println!("Unexpected reply: {value}"),
        Err(err) if err.is_transport() => println!("Transport failure: {err}"),
        Err(CexioError::Decode { body, .. }) => println!("Not JSON: {body}"),
        Err(err) => println!("Other error: {err}"),
    }
}
