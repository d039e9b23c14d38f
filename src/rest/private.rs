//! Private REST API commands (authentication required).
//!
//! These commands require credentials to be configured on the client.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::CexioError;
use crate::rest::{ApiRequest, CexioClient};

impl CexioClient {
    /// Get account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cexio_api_client::rest::CexioClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CexioClient::with_credentials("username", "key", "secret");
    ///
    ///     let balance = client.balance().await?;
    ///     println!("BTC available: {}", balance["BTC"]["available"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn balance(&self) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::balance()).await
    }

    /// Get the account's trading fees.
    pub async fn get_myfee(&self) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::get_myfee()).await
    }

    /// Get open orders for a market.
    pub async fn open_orders(&self, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::open_orders(market)).await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::cancel_order(order_id)).await
    }

    /// Get order details.
    pub async fn get_order(&self, order_id: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::get_order(order_id)).await
    }

    /// Place a buy limit order.
    pub async fn buy_limit_order(
        &self,
        amount: Decimal,
        price: Decimal,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::buy_limit_order(amount, price, market)).await
    }

    /// Place a sell limit order.
    pub async fn sell_limit_order(
        &self,
        amount: Decimal,
        price: Decimal,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::sell_limit_order(amount, price, market)).await
    }

    /// Open a long margin position.
    ///
    /// # Arguments
    ///
    /// * `amount` - Position size.
    /// * `symbol` - Currency borrowed for the position, e.g. `BTC`.
    /// * `estimated_open_price` - Expected open price.
    /// * `stop_loss_price` - Price at which the position is closed.
    /// * `leverage` - Leverage, [`DEFAULT_LEVERAGE`](crate::types::DEFAULT_LEVERAGE) if unsure.
    /// * `market` - Market pair, e.g. `BTC/USD`.
    pub async fn open_long_position(
        &self,
        amount: Decimal,
        symbol: &str,
        estimated_open_price: Decimal,
        stop_loss_price: Decimal,
        leverage: u32,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::open_long_position(
            amount,
            symbol,
            estimated_open_price,
            stop_loss_price,
            leverage,
            market,
        ))
        .await
    }

    /// Open a short margin position.
    ///
    /// Takes the same arguments as [`CexioClient::open_long_position`].
    pub async fn open_short_position(
        &self,
        amount: Decimal,
        symbol: &str,
        estimated_open_price: Decimal,
        stop_loss_price: Decimal,
        leverage: u32,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::open_short_position(
            amount,
            symbol,
            estimated_open_price,
            stop_loss_price,
            leverage,
            market,
        ))
        .await
    }

    /// Get open margin positions for a market.
    pub async fn open_positions(&self, market: &str) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::open_positions(market)).await
    }

    /// Close a margin position.
    pub async fn close_position(
        &self,
        position_id: &str,
        market: &str,
    ) -> Result<Value, CexioError> {
        self.dispatch(ApiRequest::close_position(position_id, market)).await
    }
}
