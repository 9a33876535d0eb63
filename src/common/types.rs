//! Unified types shared by the feed, the strategy layer, and the engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Instrument identifier
///
/// The exchange lists one binary-outcome contract per game: `TeamA` pays out
/// at 100 if the home team wins and 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ticker {
    TeamA,
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ticker::TeamA => write!(f, "TEAM_A"),
        }
    }
}

/// A single orderbook level update
///
/// Prices are quoted 0 to 100; `price / 100` is the market-implied
/// probability of the home team winning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTick {
    pub ticker: Ticker,
    /// Which side of the book changed
    pub side: Side,
    /// Volume now resting at this level
    pub quantity: Decimal,
    pub price: Decimal,
}

impl BookTick {
    /// Market-implied win probability at this level
    pub fn implied_probability(&self) -> Decimal {
        self.price / Decimal::from(100)
    }
}

/// An execution print (two orders matched, not necessarily ours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTick {
    pub ticker: Ticker,
    /// Side of the taker order
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// One of our own orders filling
///
/// `capital_remaining` is the authoritative balance after the fill and
/// overwrites any locally tracked capital wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountFill {
    pub ticker: Ticker,
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
    pub capital_remaining: Decimal,
}

/// Game feed event types
///
/// `Unknown` absorbs event types added to the feed after this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum GameEventType {
    StartGame,
    Score,
    Shot,
    Rebound,
    Steal,
    Block,
    Turnover,
    Foul,
    FreeThrow,
    Timeout,
    Substitution,
    Jumpball,
    EndPeriod,
    EndGame,
    Unknown,
}

impl From<String> for GameEventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "START_GAME" => GameEventType::StartGame,
            "SCORE" => GameEventType::Score,
            "SHOT" => GameEventType::Shot,
            "REBOUND" => GameEventType::Rebound,
            "STEAL" => GameEventType::Steal,
            "BLOCK" => GameEventType::Block,
            "TURNOVER" => GameEventType::Turnover,
            "FOUL" => GameEventType::Foul,
            "FREE_THROW" => GameEventType::FreeThrow,
            "TIMEOUT" => GameEventType::Timeout,
            "SUBSTITUTION" => GameEventType::Substitution,
            "JUMPBALL" => GameEventType::Jumpball,
            "END_PERIOD" => GameEventType::EndPeriod,
            "END_GAME" => GameEventType::EndGame,
            _ => GameEventType::Unknown,
        }
    }
}

/// Which team an event is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TeamSide {
    Home,
    Away,
    Unknown,
}

impl From<String> for TeamSide {
    fn from(value: String) -> Self {
        match value.as_str() {
            "home" => TeamSide::Home,
            "away" => TeamSide::Away,
            _ => TeamSide::Unknown,
        }
    }
}

/// A single game-state event from the live feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub event_type: GameEventType,
    /// Team the event is attributed to
    pub home_away: TeamSide,
    /// Home score after the event
    pub home_score: u32,
    /// Away score after the event
    pub away_score: u32,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub substituted_player_name: Option<String>,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub assist_player: Option<String>,
    #[serde(default)]
    pub rebound_type: Option<String>,
    /// Shot location in feet, where present
    #[serde(default)]
    pub coordinate_x: Option<f64>,
    #[serde(default)]
    pub coordinate_y: Option<f64>,
    /// Game clock, seconds remaining; absent for events that do not carry one
    #[serde(default)]
    pub time_seconds: Option<f64>,
}

impl GameEvent {
    /// Bare scoreboard event with no player attribution
    pub fn scoreboard(
        event_type: GameEventType,
        home_score: u32,
        away_score: u32,
        time_seconds: Option<f64>,
    ) -> Self {
        Self {
            event_type,
            home_away: TeamSide::Unknown,
            home_score,
            away_score,
            player_name: None,
            substituted_player_name: None,
            shot_type: None,
            assist_player: None,
            rebound_type: None,
            coordinate_x: None,
            coordinate_y: None,
            time_seconds,
        }
    }

    /// Home lead (negative when trailing)
    pub fn score_diff(&self) -> i64 {
        i64::from(self.home_score) - i64::from(self.away_score)
    }
}

/// Unified inbound event, one variant per exchange callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// Orderbook level changed
    Book(BookTick),
    /// Two orders matched
    Trade(TradeTick),
    /// One of our orders filled
    Fill(AccountFill),
    /// Game state changed
    Game(GameEvent),
}

impl MarketEvent {
    /// Short label used in logs and report tallies
    pub fn kind(&self) -> &'static str {
        match self {
            MarketEvent::Book(_) => "book",
            MarketEvent::Trade(_) => "trade",
            MarketEvent::Fill(_) => "fill",
            MarketEvent::Game(_) => "game",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_implied_probability() {
        let tick = BookTick {
            ticker: Ticker::TeamA,
            side: Side::Buy,
            quantity: dec!(25),
            price: dec!(58),
        };
        assert_eq!(tick.implied_probability(), dec!(0.58));
    }

    #[test]
    fn test_score_diff_can_go_negative() {
        let event = GameEvent::scoreboard(GameEventType::Score, 10, 14, Some(1800.0));
        assert_eq!(event.score_diff(), -4);
    }

    #[test]
    fn test_game_event_type_parses_feed_strings() {
        let parsed: GameEventType = serde_json::from_str("\"END_GAME\"").unwrap();
        assert_eq!(parsed, GameEventType::EndGame);

        // Types this build does not know about must not break parsing
        let parsed: GameEventType = serde_json::from_str("\"HALFTIME_SHOW\"").unwrap();
        assert_eq!(parsed, GameEventType::Unknown);
    }

    #[test]
    fn test_ticker_wire_format() {
        assert_eq!(serde_json::to_string(&Ticker::TeamA).unwrap(), "\"TEAM_A\"");
        assert_eq!(Ticker::TeamA.to_string(), "TEAM_A");
    }
}
