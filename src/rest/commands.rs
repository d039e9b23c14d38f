//! CEX.IO REST API command names and the public/private classification table.

use std::collections::HashSet;

/// Base URL for the CEX.IO REST API.
pub const CEXIO_BASE_URL: &str = "https://cex.io/api";

/// Public commands (no authentication required).
pub mod public {
    /// Trading limits per currency pair.
    pub const CURRENCY_LIMITS: &str = "currency_limits";
    /// Ticker for one market.
    pub const TICKER: &str = "ticker";
    /// Last trade price for one market.
    pub const LAST_PRICE: &str = "last_price";
    /// Last trade prices for several currencies.
    pub const LAST_PRICES: &str = "last_prices";
    /// Convert an amount at the last price.
    pub const CONVERT: &str = "convert";
    /// Historical price statistics.
    pub const PRICE_STATS: &str = "price_stats";
    /// Order book.
    pub const ORDER_BOOK: &str = "order_book";
    /// Public trade history.
    pub const TRADE_HISTORY: &str = "trade_history";

    /// Every public command.
    pub const ALL: [&str; 8] = [
        CURRENCY_LIMITS,
        TICKER,
        LAST_PRICE,
        LAST_PRICES,
        CONVERT,
        PRICE_STATS,
        ORDER_BOOK,
        TRADE_HISTORY,
    ];
}

/// Private commands (authentication required).
pub mod private {
    // Account commands
    /// Account balance.
    pub const BALANCE: &str = "balance";
    /// Trading fees for the account.
    pub const GET_MYFEE: &str = "get_myfee";

    // Order commands
    /// Open orders for a market.
    pub const OPEN_ORDERS: &str = "open_orders";
    /// Place a limit order.
    pub const PLACE_ORDER: &str = "place_order";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancel_order";
    /// Order details.
    pub const GET_ORDER: &str = "get_order";

    // Margin commands
    /// Open a margin position.
    pub const OPEN_POSITION: &str = "open_position";
    /// Open margin positions for a market.
    pub const OPEN_POSITIONS: &str = "open_positions";
    /// Close a margin position.
    pub const CLOSE_POSITION: &str = "close_position";
}

/// The set of commands that are sent without authentication.
///
/// Any command not in the set is treated as private and signed. The set is
/// fixed once the client is built; pass a modified set to
/// [`CexioClientBuilder::public_commands`](crate::rest::CexioClientBuilder::public_commands)
/// to change the classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet {
    commands: HashSet<String>,
}

impl CommandSet {
    /// Create a command set from a list of command names.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// The public commands of the CEX.IO REST API.
    pub fn cexio_public() -> Self {
        Self::new(public::ALL)
    }

    /// Return a copy of the set that also contains `command`.
    pub fn with(mut self, command: impl Into<String>) -> Self {
        self.commands.insert(command.into());
        self
    }

    /// Return a copy of the set without `command`.
    pub fn without(mut self, command: &str) -> Self {
        self.commands.remove(command);
        self
    }

    /// Check whether `command` is public.
    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    /// Number of public commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the set is empty (every command is private).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the public command names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::cexio_public()
    }
}
