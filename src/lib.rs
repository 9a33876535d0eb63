//! Courtside Library
//!
//! An event-driven fair-value trading strategy engine for in-game sports
//! exchange markets: a logistic win-probability model, the exchange callback
//! contract, and a replayable event loop.

pub mod common;
pub mod config;
pub mod engine;
pub mod exchange;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{EngineError, Result};
pub use common::traits::EventFeed;
pub use common::types::{
    AccountFill, BookTick, GameEvent, GameEventType, MarketEvent, Side, TeamSide, Ticker,
    TradeTick,
};
pub use config::types::AppConfig;
pub use engine::{Engine, EngineReport};
pub use exchange::{OrderGateway, OrderId, OrderKind, OrderTicket, PaperGateway, ReplayFeed, TimeInForce};

// Strategy types
pub use strategy::{
    BoxedStrategy, Decision, FairValueStrategy, Position, Strategy, TradeIntent, WinProbability,
};
