//! The strategy callback contract

use crate::common::types::{AccountFill, BookTick, GameEvent, TradeTick};
use crate::strategy::types::Decision;

/// Core strategy trait
///
/// The four event callbacks mirror the exchange driver's contract: orderbook
/// update, trade update, account update, game event update. Each returns a
/// [`Decision`] the engine executes through the order gateway.
///
/// # Implementation Notes
///
/// - Callbacks run on the event hot path - no blocking I/O
/// - Game state (scores, clock) and position are owned by the strategy
/// - The driver can start mid-game; strategies must cope with book updates
///   arriving before the first game event
pub trait Strategy: Send {
    /// Unique identifier for this strategy
    fn name(&self) -> &str;

    /// Called whenever an orderbook level changes
    fn on_orderbook_update(&mut self, tick: &BookTick) -> Decision;

    /// Called whenever two orders match (ours or anyone's)
    ///
    /// Default implementation ignores the print.
    fn on_trade_update(&mut self, _tick: &TradeTick) -> Decision {
        Decision::NoGo
    }

    /// Called whenever one of our orders is filled
    ///
    /// `fill.capital_remaining` is authoritative; strategies tracking capital
    /// must overwrite their copy with it.
    fn on_account_update(&mut self, _fill: &AccountFill) -> Decision {
        Decision::NoGo
    }

    /// Called whenever a game event occurs
    ///
    /// An `END_GAME` event ends the lifecycle: strategies must return to
    /// their start-of-game state.
    fn on_game_event_update(&mut self, event: &GameEvent) -> Decision;

    /// Called once before the first event is delivered
    ///
    /// Default implementation does nothing.
    fn on_register(&mut self) {}

    /// Called when the event stream ends or the system is shutting down
    ///
    /// Default implementation does nothing.
    fn on_shutdown(&mut self) {}
}

/// Boxed strategy for dynamic dispatch
pub type BoxedStrategy = Box<dyn Strategy>;
