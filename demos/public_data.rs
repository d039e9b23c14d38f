//! Example: Fetching public market data from CEX.IO.
//!
//! This example demonstrates how to fetch publicly available market data
//! without authentication.
//!
//! Run with: cargo run --example public_data

use cexio_api_client::rest::CexioClient;
use cexio_api_client::types::{DEFAULT_DEPTH, DEFAULT_MARKET, DEFAULT_SINCE};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public commands (no credentials needed)
    let client = CexioClient::new();

    println!("=== Ticker ===");
    let ticker = client.ticker(DEFAULT_MARKET).await?;
    println!("{ticker:#}");

    println!("\n=== Last Price ===");
    let last = client.last_price(DEFAULT_MARKET).await?;
    println!("{}", last["lprice"]);

    println!("\n=== Last Prices ===");
    let prices = client.last_prices(&["BTC", "USD", "EUR"]).await?;
    println!("{prices:#}");

    println!("\n=== Convert 1 BTC ===");
    let converted = client.convert(Decimal::ONE, DEFAULT_MARKET).await?;
    println!("{}", converted["amnt"]);

    println!("\n=== Order Book ===");
    let book = client.order_book(DEFAULT_DEPTH, DEFAULT_MARKET).await?;
    println!("Bids: {}", book["bids"]);
    println!("Asks: {}", book["asks"]);

    println!("\n=== Trade History ===");
    let trades = client.trade_history(DEFAULT_SINCE, DEFAULT_MARKET).await?;
    if let Some(trades) = trades.as_array() {
        println!("Got {} trades", trades.len());
    }

    Ok(())
}
