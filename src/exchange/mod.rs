//! Exchange-facing surface: order entry, paper fills, and recorded feeds

pub mod messages;
pub mod orders;
pub mod paper;
pub mod replay;

pub use orders::{BoxedGateway, OrderGateway, OrderId, OrderKind, OrderTicket, TimeInForce};
pub use paper::{LedgerEntry, PaperGateway};
pub use replay::ReplayFeed;
