//! Event loop wiring feed, strategy, and order gateway together

use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::common::types::MarketEvent;
use crate::exchange::orders::{OrderGateway, OrderKind};
use crate::strategy::{BoxedStrategy, Decision, TradeIntent};

/// Tallies from one engine run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineReport {
    pub book_events: u64,
    pub trade_events: u64,
    pub fill_events: u64,
    pub game_events: u64,
    /// Go decisions successfully handed to the gateway
    pub orders_placed: u64,
    /// Capital from the most recent account update, if any arrived
    pub last_capital: Option<Decimal>,
}

impl EngineReport {
    pub fn total_events(&self) -> u64 {
        self.book_events + self.trade_events + self.fill_events + self.game_events
    }
}

/// Dispatches inbound events to the strategy and executes its decisions
///
/// The engine is the only component that touches both sides of the contract:
/// inbound callbacks and outward order placement. Strategies stay pure
/// event-to-decision functions.
pub struct Engine<G: OrderGateway> {
    strategy: BoxedStrategy,
    gateway: G,
}

impl<G: OrderGateway> Engine<G> {
    pub fn new(strategy: BoxedStrategy, gateway: G) -> Self {
        Self { strategy, gateway }
    }

    /// The gateway, for post-run inspection
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Drain the event channel until the feed closes it
    pub async fn run(&mut self, mut receiver: mpsc::Receiver<MarketEvent>) -> EngineReport {
        let mut report = EngineReport::default();

        info!("Engine starting with strategy '{}'", self.strategy.name());
        self.strategy.on_register();

        while let Some(event) = receiver.recv().await {
            let decision = match &event {
                MarketEvent::Book(tick) => {
                    report.book_events += 1;
                    self.strategy.on_orderbook_update(tick)
                }
                MarketEvent::Trade(tick) => {
                    report.trade_events += 1;
                    self.gateway.note_trade_price(tick.ticker, tick.price);
                    self.strategy.on_trade_update(tick)
                }
                MarketEvent::Fill(fill) => {
                    report.fill_events += 1;
                    report.last_capital = Some(fill.capital_remaining);
                    self.strategy.on_account_update(fill)
                }
                MarketEvent::Game(game_event) => {
                    report.game_events += 1;
                    self.strategy.on_game_event_update(game_event)
                }
            };

            if let Decision::Go(intent) = decision {
                if self.execute(&intent) {
                    report.orders_placed += 1;
                }
            }
        }

        self.strategy.on_shutdown();
        info!(
            "Engine stopped: {} events, {} orders placed",
            report.total_events(),
            report.orders_placed
        );

        report
    }

    /// Hand a trade intent to the gateway; a rejected order is logged, not fatal
    fn execute(&mut self, intent: &TradeIntent) -> bool {
        debug!(
            "Executing intent: {} {} {} ({})",
            intent.side, intent.quantity, intent.ticker, intent.reason
        );

        let result = match intent.kind {
            OrderKind::Market => {
                self.gateway
                    .place_market_order(intent.ticker, intent.side, intent.quantity)
            }
            OrderKind::Limit { price, tif } => self
                .gateway
                .place_limit_order(intent.ticker, intent.side, intent.quantity, price, tif)
                .map(|order_id| debug!("Placed limit order {}", order_id)),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                error!("Order rejected by gateway: {}", e);
                false
            }
        }
    }
}
