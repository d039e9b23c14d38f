//! # CEX.IO Client
//!
//! An async Rust client library for the CEX.IO exchange REST API.
//!
//! ## Features
//!
//! - Public market data: tickers, prices, order books, trade history, currency limits
//! - Private trading: balances, limit orders, margin positions
//! - HMAC-SHA256 request signing with strictly increasing nonces
//! - Responses returned as untouched JSON values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cexio_api_client::rest::CexioClient;
//! use cexio_api_client::types::DEFAULT_MARKET;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CexioClient::new();
//!     let ticker = client.ticker(DEFAULT_MARKET).await?;
//!     println!("Ticker: {ticker}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CexioError};
pub use rest::{ApiRequest, CexioClient, CommandSet, ParamValue, Params};
pub use types::{PositionType, Side};

/// Result type alias using CexioError
pub type Result<T> = std::result::Result<T, CexioError>;
