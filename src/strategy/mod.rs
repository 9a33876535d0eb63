//! Strategy module for trade decision making
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Exchange driver (external) or ReplayFeed                   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  Engine dispatches MarketEvent to the matching callback     │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  Strategy callback → Decision (Go/NoGo)                     │
//! │       │                                                     │
//! │       ▼ (if Go)                                             │
//! │  OrderGateway executes the TradeIntent                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`Strategy`]: trait exposing the four exchange callbacks
//! - [`Decision`]: Go/NoGo enum returned by every callback
//! - [`TradeIntent`]: the order a Go decision wants executed
//! - [`WinProbability`]: logistic model over score differential and clock
//! - [`FairValueStrategy`]: buys under model fair value, sells over it

mod fair_value;
mod model;
mod traits;
mod types;

pub use fair_value::FairValueStrategy;
pub use model::WinProbability;
pub use traits::{BoxedStrategy, Strategy};
pub use types::{Decision, Position, TradeIntent};
