//! Outward order contract against the exchange
//!
//! The matching backend lives outside this repository. These types mirror its
//! order entry surface: market orders, limit orders with an optional
//! immediate-or-cancel flag, and cancellation by order id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::Result;
use crate::common::types::{Side, Ticker};

/// Exchange-assigned order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time in force for limit orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Rest on the book until filled or cancelled
    GoodTillCancel,
    /// Fill what is immediately available, cancel the rest
    ImmediateOrCancel,
}

/// How an order executes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit { price: Decimal, tif: TimeInForce },
}

/// A fully specified order request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub ticker: Ticker,
    pub side: Side,
    pub quantity: Decimal,
    pub kind: OrderKind,
}

impl OrderTicket {
    pub fn market(ticker: Ticker, side: Side, quantity: Decimal) -> Self {
        Self {
            ticker,
            side,
            quantity,
            kind: OrderKind::Market,
        }
    }

    pub fn limit(
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        tif: TimeInForce,
    ) -> Self {
        Self {
            ticker,
            side,
            quantity,
            kind: OrderKind::Limit { price, tif },
        }
    }
}

/// Order entry interface to the exchange
///
/// Called synchronously from the event hot path. Implementations must not
/// block; the live implementation hands tickets to the external driver, the
/// paper implementation fills them in memory.
pub trait OrderGateway: Send {
    /// Place a market order
    fn place_market_order(&mut self, ticker: Ticker, side: Side, quantity: Decimal)
        -> Result<()>;

    /// Place a limit order, returning the id assigned by the exchange
    fn place_limit_order(
        &mut self,
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        tif: TimeInForce,
    ) -> Result<OrderId>;

    /// Cancel an order
    ///
    /// Returns `Ok(true)` if the order was open and is now cancelled,
    /// `Ok(false)` if it was already filled, cancelled, or never existed.
    fn cancel_order(&mut self, ticker: Ticker, order_id: OrderId) -> Result<bool>;

    /// Market-data hint: the last traded price for an instrument
    ///
    /// The engine calls this on every execution print. Implementations that
    /// need a reference price (paper fills, slippage checks) override it;
    /// the live gateway ignores it.
    fn note_trade_price(&mut self, _ticker: Ticker, _price: Decimal) {}
}

/// Boxed gateway for dynamic dispatch
pub type BoxedGateway = Box<dyn OrderGateway>;
