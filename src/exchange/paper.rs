//! In-memory paper gateway for dry runs and tests

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::orders::{OrderGateway, OrderId, OrderTicket, TimeInForce};
use crate::common::errors::{EngineError, Result};
use crate::common::types::{AccountFill, MarketEvent, Side, Ticker};

/// An order the paper gateway has accepted
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: OrderId,
    pub ticket: OrderTicket,
    pub placed_at: DateTime<Utc>,
}

/// Paper-trading implementation of [`OrderGateway`]
///
/// Market orders fill immediately at the last seen trade price and debit or
/// credit paper capital. Good-till-cancel limit orders rest until cancelled;
/// immediate-or-cancel orders are accepted and expire on the spot, matching
/// an empty far book. Every accepted ticket lands in the ledger.
pub struct PaperGateway {
    next_id: u64,
    capital: Decimal,
    open_orders: HashMap<OrderId, OrderTicket>,
    ledger: Vec<LedgerEntry>,
    last_trade_price: Option<Decimal>,
    /// When attached, market fills are echoed back as account updates.
    /// Weak so the gateway never keeps the event channel open after the
    /// feed is done.
    fill_sender: Option<mpsc::WeakSender<MarketEvent>>,
}

impl PaperGateway {
    pub fn new(starting_capital: Decimal) -> Self {
        Self {
            next_id: 1,
            capital: starting_capital,
            open_orders: HashMap::new(),
            ledger: Vec::new(),
            last_trade_price: None,
            fill_sender: None,
        }
    }

    /// Echo synthetic account fills into the given channel
    pub fn with_fill_sender(mut self, sender: &mpsc::Sender<MarketEvent>) -> Self {
        self.fill_sender = Some(sender.downgrade());
        self
    }

    /// Remaining paper capital
    pub fn capital(&self) -> Decimal {
        self.capital
    }

    /// Orders currently resting
    pub fn open_order_count(&self) -> usize {
        self.open_orders.len()
    }

    /// Every ticket accepted so far, in placement order
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    fn allocate_id(&mut self) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;
        id
    }

    fn record(&mut self, id: OrderId, ticket: OrderTicket) {
        self.ledger.push(LedgerEntry {
            id,
            ticket,
            placed_at: Utc::now(),
        });
    }

    fn apply_fill(&mut self, ticker: Ticker, side: Side, price: Decimal, quantity: Decimal) {
        let notional = price * quantity;
        match side {
            Side::Buy => self.capital -= notional,
            Side::Sell => self.capital += notional,
        }

        if let Some(weak) = &self.fill_sender {
            let fill = MarketEvent::Fill(AccountFill {
                ticker,
                side,
                price,
                quantity,
                capital_remaining: self.capital,
            });
            match weak.upgrade() {
                Some(sender) => {
                    if let Err(e) = sender.try_send(fill) {
                        warn!("Dropping synthetic fill, channel full: {}", e);
                    }
                }
                None => debug!("Event channel closed, synthetic fill not echoed"),
            }
        }
    }

    fn validate(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(EngineError::OrderRejected(
                "quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl OrderGateway for PaperGateway {
    fn place_market_order(
        &mut self,
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
    ) -> Result<()> {
        Self::validate(quantity)?;

        let id = self.allocate_id();
        self.record(id, OrderTicket::market(ticker, side, quantity));

        match self.last_trade_price {
            Some(price) => {
                debug!("Paper fill: {} {} {} @ {}", side, quantity, ticker, price);
                self.apply_fill(ticker, side, price, quantity);
            }
            None => {
                // No prints yet this game; accept the order but leave capital alone
                warn!("Market order accepted with no reference price, skipping paper fill");
            }
        }

        Ok(())
    }

    fn place_limit_order(
        &mut self,
        ticker: Ticker,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        tif: TimeInForce,
    ) -> Result<OrderId> {
        Self::validate(quantity)?;
        if price < Decimal::ZERO || price > Decimal::from(100) {
            return Err(EngineError::OrderRejected(format!(
                "limit price {} outside [0, 100]",
                price
            )));
        }

        let id = self.allocate_id();
        let ticket = OrderTicket::limit(ticker, side, quantity, price, tif);
        self.record(id, ticket.clone());

        match tif {
            TimeInForce::GoodTillCancel => {
                self.open_orders.insert(id, ticket);
            }
            TimeInForce::ImmediateOrCancel => {
                debug!("IOC order {} expired unfilled", id);
            }
        }

        Ok(id)
    }

    fn cancel_order(&mut self, _ticker: Ticker, order_id: OrderId) -> Result<bool> {
        Ok(self.open_orders.remove(&order_id).is_some())
    }

    fn note_trade_price(&mut self, _ticker: Ticker, price: Decimal) {
        self.last_trade_price = Some(price);
    }
}
