//! Example: Account and trading commands.
//!
//! Requires CEXIO_USERNAME, CEXIO_API_KEY and CEXIO_API_SECRET.
//! Orders are only placed when CEXIO_PLACE_ORDERS=1.
//!
//! Run with: cargo run --example private_trading

use std::sync::Arc;

use cexio_api_client::auth::EnvCredentials;
use cexio_api_client::error::ApiError;
use cexio_api_client::rest::CexioClient;
use cexio_api_client::types::DEFAULT_MARKET;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Credentials not set, skipping.");
        return Ok(());
    };
    let client = CexioClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let balance = client.balance().await?;
    if let Some(err) = ApiError::from_response(&balance) {
        println!("Balance request rejected: {err}");
        return Ok(());
    }
    println!("BTC: {}", balance["BTC"]);

    let fees = client.get_myfee().await?;
    println!("Fees: {fees}");

    let orders = client.open_orders(DEFAULT_MARKET).await?;
    println!("Open orders: {orders}");

    if std::env::var("CEXIO_PLACE_ORDERS").ok().as_deref() == Some("1") {
        // Far below market so it rests on the book.
        let order = client
            .buy_limit_order(Decimal::new(1, 3), Decimal::from(1000), DEFAULT_MARKET)
            .await?;
        println!("Placed: {order}");

        if let Some(id) = order["id"].as_str() {
            println!("Details: {}", client.get_order(id).await?);
            println!("Cancelled: {}", client.cancel_order(id).await?);
        }
    }

    Ok(())
}
