//! Decision and position types for the strategy layer

use rust_decimal::Decimal;

use crate::common::types::{Side, Ticker};
use crate::exchange::orders::{OrderKind, TimeInForce};

/// A single trade the strategy wants executed
///
/// The engine routes intents to the order gateway; the strategy never talks
/// to the exchange directly.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeIntent {
    pub ticker: Ticker,
    pub side: Side,
    pub quantity: Decimal,
    pub kind: OrderKind,
    pub reason: String,
}

impl TradeIntent {
    /// Market order intent
    pub fn market(
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            ticker,
            side,
            quantity,
            kind: OrderKind::Market,
            reason: reason.into(),
        }
    }

    /// Limit order intent
    pub fn limit(
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        tif: TimeInForce,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            ticker,
            side,
            quantity,
            kind: OrderKind::Limit { price, tif },
            reason: reason.into(),
        }
    }
}

/// Strategy decision output
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// No action should be taken
    NoGo,
    /// Execute the trade intent
    Go(TradeIntent),
}

impl Decision {
    /// Create a NoGo decision
    pub fn no_go() -> Self {
        Self::NoGo
    }

    /// Create a Go decision with a market order intent
    pub fn go_market(
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        reason: impl Into<String>,
    ) -> Self {
        Self::Go(TradeIntent::market(ticker, side, quantity, reason))
    }

    /// Returns true if this is a Go decision
    pub fn is_go(&self) -> bool {
        matches!(self, Self::Go(_))
    }
}

/// Position in the single game contract
///
/// Strictly flat or long the fixed order quantity; the strategy never shorts
/// and never pyramids.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    #[default]
    Flat,
    Long {
        /// Quoted price (0 to 100) paid on entry
        entry_price: Decimal,
    },
}

impl Position {
    pub fn is_flat(&self) -> bool {
        matches!(self, Position::Flat)
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Position::Long { .. })
    }

    /// Entry price, when long
    pub fn entry_price(&self) -> Option<Decimal> {
        match self {
            Position::Flat => None,
            Position::Long { entry_price } => Some(*entry_price),
        }
    }
}
