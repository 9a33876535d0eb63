//! Trait definitions for event feeds

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::Result;
use super::types::MarketEvent;

/// Trait for sources of inbound events (replay files, the live exchange driver)
///
/// A feed pushes `MarketEvent`s into the provided channel until it is
/// exhausted or disconnected. The engine owns the receiving end and never
/// cares where events come from.
#[async_trait]
pub trait EventFeed: Send {
    /// Stream all events into the channel, in source order
    ///
    /// Returns once the source is exhausted. Dropping the receiver mid-stream
    /// is not an error; the feed stops early.
    async fn start(&mut self, sender: mpsc::Sender<MarketEvent>) -> Result<()>;

    /// Get the name of the feed (for logs)
    fn name(&self) -> &'static str;
}
