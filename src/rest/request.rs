//! Endpoint catalog: typed constructors mapping each CEX.IO operation to a
//! `(command, params, action)` triple.
//!
//! Building an [`ApiRequest`] performs no I/O, so request shapes can be
//! inspected and tested without a server.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::rest::commands::{private, public};
use crate::types::{PositionType, Side};

/// Form fields injected into every private request.
pub const AUTH_FIELDS: [&str; 3] = ["key", "signature", "nonce"];

/// Request parameters, serialized as a form body.
pub type Params = BTreeMap<String, ParamValue>;

/// A scalar request parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Exact decimal (amounts, prices)
    Decimal(Decimal),
    /// Flag, sent as `true` or `false`
    Bool(bool),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Decimal(d) => write!(f, "{d}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// A fully shaped call: command name, form parameters and URL action suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Command name, the first path segment after the base URL
    pub command: &'static str,
    /// Form parameters (authentication fields excluded)
    pub params: Params,
    /// Opaque path/query suffix appended after the command
    pub action: String,
}

impl ApiRequest {
    /// Create a request with no parameters.
    pub fn new(command: &'static str, action: impl Into<String>) -> Self {
        Self {
            command,
            params: Params::new(),
            action: action.into(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    // ========== Public Commands ==========

    /// Ticker for a market, e.g. `BTC/USD`.
    pub fn ticker(market: &str) -> Self {
        Self::new(public::TICKER, market)
    }

    /// Last price for a market.
    pub fn last_price(market: &str) -> Self {
        Self::new(public::LAST_PRICE, market)
    }

    /// Last prices for a list of currencies, sent as `BTC/USD/EUR`.
    pub fn last_prices(currencies: &[&str]) -> Self {
        Self::new(public::LAST_PRICES, currencies.join("/"))
    }

    /// Trading limits for all pairs.
    pub fn currency_limits() -> Self {
        Self::new(public::CURRENCY_LIMITS, "")
    }

    /// Convert `amount` of the first currency of `market` into the second.
    pub fn convert(amount: Decimal, market: &str) -> Self {
        Self::new(public::CONVERT, market).param("amnt", amount)
    }

    /// Price statistics over the last `last_hours` hours.
    pub fn price_stats(last_hours: u32, max_resp_arr_size: u32, market: &str) -> Self {
        Self::new(public::PRICE_STATS, market)
            .param("lastHours", last_hours)
            .param("maxRespArrSize", max_resp_arr_size)
    }

    /// Order book limited to `depth` levels.
    pub fn order_book(depth: u32, market: &str) -> Self {
        Self::new(public::ORDER_BOOK, format!("{market}/?depth={depth}"))
    }

    /// Trades since trade id `since`.
    pub fn trade_history(since: u64, market: &str) -> Self {
        Self::new(public::TRADE_HISTORY, format!("{market}/?since={since}"))
    }

    // ========== Private Commands - Account ==========

    /// Account balance.
    pub fn balance() -> Self {
        Self::new(private::BALANCE, "")
    }

    /// Trading fees for the account.
    pub fn get_myfee() -> Self {
        Self::new(private::GET_MYFEE, "")
    }

    // ========== Private Commands - Orders ==========

    /// Open orders for a market.
    pub fn open_orders(market: &str) -> Self {
        Self::new(private::OPEN_ORDERS, market)
    }

    /// Cancel an order by id.
    pub fn cancel_order(order_id: &str) -> Self {
        Self::new(private::CANCEL_ORDER, "").param("id", order_id)
    }

    /// Order details by id.
    pub fn get_order(order_id: &str) -> Self {
        Self::new(private::GET_ORDER, "").param("id", order_id)
    }

    /// Limit order on either side.
    pub fn limit_order(side: Side, amount: Decimal, price: Decimal, market: &str) -> Self {
        Self::new(private::PLACE_ORDER, market)
            .param("type", side.as_str())
            .param("amount", amount)
            .param("price", price)
    }

    /// Buy limit order.
    pub fn buy_limit_order(amount: Decimal, price: Decimal, market: &str) -> Self {
        Self::limit_order(Side::Buy, amount, price, market)
    }

    /// Sell limit order.
    pub fn sell_limit_order(amount: Decimal, price: Decimal, market: &str) -> Self {
        Self::limit_order(Side::Sell, amount, price, market)
    }

    // ========== Private Commands - Margin ==========

    /// Margin position in either direction. Any slippage is accepted.
    pub fn open_position(
        position_type: PositionType,
        amount: Decimal,
        symbol: &str,
        estimated_open_price: Decimal,
        stop_loss_price: Decimal,
        leverage: u32,
        market: &str,
    ) -> Self {
        Self::new(private::OPEN_POSITION, market)
            .param("amount", amount)
            .param("symbol", symbol)
            .param("leverage", leverage)
            .param("ptype", position_type.as_str())
            .param("anySlippage", true)
            .param("eoprice", estimated_open_price)
            .param("stopLossPrice", stop_loss_price)
    }

    /// Long margin position.
    pub fn open_long_position(
        amount: Decimal,
        symbol: &str,
        estimated_open_price: Decimal,
        stop_loss_price: Decimal,
        leverage: u32,
        market: &str,
    ) -> Self {
        Self::open_position(
            PositionType::Long,
            amount,
            symbol,
            estimated_open_price,
            stop_loss_price,
            leverage,
            market,
        )
    }

    /// Short margin position.
    pub fn open_short_position(
        amount: Decimal,
        symbol: &str,
        estimated_open_price: Decimal,
        stop_loss_price: Decimal,
        leverage: u32,
        market: &str,
    ) -> Self {
        Self::open_position(
            PositionType::Short,
            amount,
            symbol,
            estimated_open_price,
            stop_loss_price,
            leverage,
            market,
        )
    }

    /// Open margin positions for a market.
    pub fn open_positions(market: &str) -> Self {
        Self::new(private::OPEN_POSITIONS, market)
    }

    /// Close a margin position by id.
    pub fn close_position(position_id: &str, market: &str) -> Self {
        Self::new(private::CLOSE_POSITION, market).param("id", position_id)
    }
}
