//! Fair-value threshold strategy for the home-win contract

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::common::types::{AccountFill, BookTick, GameEvent, GameEventType, Side, TradeTick};
use crate::config::types::{ModelConfig, StrategyConfig};
use crate::strategy::model::WinProbability;
use crate::strategy::traits::Strategy;
use crate::strategy::types::{Decision, Position};

/// Buys the contract when the market prices the home win materially below the
/// model, sells when the market runs materially above it.
///
/// Entry and exit multipliers are asymmetric: the default configuration
/// enters below 90% of model fair value and exits above 105% of it, so small
/// oscillations around fair value do not churn the position.
pub struct FairValueStrategy {
    model: WinProbability,
    entry_discount: f64,
    exit_premium: f64,
    order_quantity: Decimal,
    starting_capital: Decimal,

    // Per-game mutable state, rebuilt on END_GAME
    position: Position,
    capital: Decimal,
    home_score: u32,
    away_score: u32,
    time_seconds: f64,
    regulation_seconds: f64,
}

impl FairValueStrategy {
    pub fn new(model_config: &ModelConfig, strategy_config: &StrategyConfig) -> Self {
        Self {
            model: WinProbability::from_config(model_config),
            entry_discount: strategy_config.entry_discount,
            exit_premium: strategy_config.exit_premium,
            order_quantity: strategy_config.order_quantity,
            starting_capital: strategy_config.starting_capital,
            position: Position::Flat,
            capital: strategy_config.starting_capital,
            home_score: 0,
            away_score: 0,
            time_seconds: model_config.regulation_seconds,
            regulation_seconds: model_config.regulation_seconds,
        }
    }

    /// Return to the start-of-game position
    ///
    /// The driver can start mid-game and replays end with END_GAME, so
    /// everything mutable must come back to exactly these values.
    fn reset_state(&mut self) {
        self.position = Position::Flat;
        self.capital = self.starting_capital;
        self.home_score = 0;
        self.away_score = 0;
        self.time_seconds = self.regulation_seconds;
    }

    /// Model-estimated probability of the home team winning
    pub fn model_probability(&self) -> f64 {
        let score_diff = i64::from(self.home_score) - i64::from(self.away_score);
        self.model.probability(score_diff, self.time_seconds)
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Capital as last reported by the exchange
    pub fn capital(&self) -> Decimal {
        self.capital
    }

    /// Game clock the strategy currently believes
    pub fn time_seconds(&self) -> f64 {
        self.time_seconds
    }
}

impl Strategy for FairValueStrategy {
    fn name(&self) -> &str {
        "fair_value"
    }

    fn on_orderbook_update(&mut self, tick: &BookTick) -> Decision {
        let Some(market_prob) = tick.implied_probability().to_f64() else {
            warn!("Unusable book price {}, ignoring update", tick.price);
            return Decision::NoGo;
        };
        let model_prob = self.model_probability();

        if self.position.is_flat() && market_prob < model_prob * self.entry_discount {
            info!(
                "Entering long: market {:.2} below model {:.2}",
                market_prob, model_prob
            );
            self.position = Position::Long {
                entry_price: tick.price,
            };
            return Decision::go_market(
                tick.ticker,
                Side::Buy,
                self.order_quantity,
                format!("market {:.2} under model {:.2}", market_prob, model_prob),
            );
        }

        if self.position.is_long() && market_prob > model_prob * self.exit_premium {
            info!(
                "Exiting long: market {:.2} above model {:.2}",
                market_prob, model_prob
            );
            self.position = Position::Flat;
            return Decision::go_market(
                tick.ticker,
                Side::Sell,
                self.order_quantity,
                format!("market {:.2} over model {:.2}", market_prob, model_prob),
            );
        }

        Decision::NoGo
    }

    fn on_trade_update(&mut self, tick: &TradeTick) -> Decision {
        debug!(
            "Trade: {} {} {} @ {}",
            tick.ticker, tick.side, tick.quantity, tick.price
        );
        Decision::NoGo
    }

    fn on_account_update(&mut self, fill: &AccountFill) -> Decision {
        self.capital = fill.capital_remaining;
        debug!(
            "Account: {} {} @ {}, capital {}",
            fill.side, fill.quantity, fill.price, fill.capital_remaining
        );
        Decision::NoGo
    }

    fn on_game_event_update(&mut self, event: &GameEvent) -> Decision {
        self.home_score = event.home_score;
        self.away_score = event.away_score;
        if let Some(time_seconds) = event.time_seconds {
            self.time_seconds = time_seconds;
        }

        debug!(
            "Game event {:?}: score {}-{}, {:.0}s remaining",
            event.event_type, event.home_score, event.away_score, self.time_seconds
        );

        if event.event_type == GameEventType::EndGame {
            info!("Game over, resetting strategy state");
            self.reset_state();
        }

        Decision::NoGo
    }
}
