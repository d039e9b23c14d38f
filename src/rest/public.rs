//! Public REST API commands (no authentication required).

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::CexioError;
use crate::rest::{ApiRequest, CexioClient};

impl CexioClient {
    /// Get the ticker for a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cexio_api_client::rest::CexioClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CexioClient::new();
    ///     let ticker = client.ticker("BTC/USD").await?;
    ///     println!("Last: {}", ticker["last"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ticker(&self, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::ticker(market)).await
    }

    /// Get the last trade price for a market.
    pub async fn last_price(&self, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::last_price(market)).await
    }

    /// Get last prices for every pair between the given currencies.
    ///
    /// # Arguments
    ///
    /// * `currencies` - Currency symbols, e.g. `["BTC", "USD", "EUR"]`.
    pub async fn last_prices(&self, currencies: &[&str]) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::last_prices(currencies)).await
    }

    /// Get trading limits for all currency pairs.
    pub async fn currency_limits(&self) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::currency_limits()).await
    }

    /// Convert an amount of the first currency of `market` into the second
    /// at the last price.
    pub async fn convert(&self, amount: Decimal, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::convert(amount, market)).await
    }

    /// Get price statistics for a market.
    ///
    /// # Arguments
    ///
    /// * `last_hours` - Length of the window in hours.
    /// * `max_resp_arr_size` - Maximum number of points returned.
    /// * `market` - Market pair, e.g. `BTC/USD`.
    pub async fn price_stats(
        &self,
        last_hours: u32,
        max_resp_arr_size: u32,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::price_stats(last_hours, max_resp_arr_size, market)).await
    }

    /// Get the order book for a market, limited to `depth` levels per side.
    pub async fn order_book(&self, depth: u32, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::order_book(depth, market)).await
    }

    /// Get public trades for a market starting at trade id `since`.
    pub async fn trade_history(&self, since: u64, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::trade_history(since, market)).await
    }
}
