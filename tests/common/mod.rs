//! Common test utilities and fixtures

use courtside::common::types::{
    BookTick, GameEvent, GameEventType, MarketEvent, Side, Ticker, TradeTick,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Book tick at the given quoted price
pub fn book(price: Decimal) -> MarketEvent {
    MarketEvent::Book(BookTick {
        ticker: Ticker::TeamA,
        side: Side::Buy,
        quantity: dec!(25),
        price,
    })
}

/// Execution print at the given price
pub fn trade(price: Decimal) -> MarketEvent {
    MarketEvent::Trade(TradeTick {
        ticker: Ticker::TeamA,
        side: Side::Sell,
        quantity: dec!(10),
        price,
    })
}

/// Scoreboard event
pub fn score(home: u32, away: u32, time_seconds: f64) -> MarketEvent {
    MarketEvent::Game(GameEvent::scoreboard(
        GameEventType::Score,
        home,
        away,
        Some(time_seconds),
    ))
}

/// End-of-game event
pub fn end_game(home: u32, away: u32) -> MarketEvent {
    MarketEvent::Game(GameEvent::scoreboard(
        GameEventType::EndGame,
        home,
        away,
        Some(0.0),
    ))
}

/// A scripted close game that should produce one entry and one exit
///
/// With the default model (k = 0.1):
/// - 8-2 at 2400s puts the model at ~0.67; a 55 quote is under the 0.90
///   entry discount, so the strategy buys (paper fill at the last print, 50).
/// - 20-10 at 1800s puts the model at ~0.83; an 88 quote is over the 1.05
///   exit premium, so the strategy sells at the 88 print.
pub fn scripted_game() -> Vec<MarketEvent> {
    vec![
        MarketEvent::Game(GameEvent::scoreboard(
            GameEventType::StartGame,
            0,
            0,
            Some(2880.0),
        )),
        trade(dec!(50)),
        book(dec!(50)),
        score(8, 2, 2400.0),
        book(dec!(55)),
        score(20, 10, 1800.0),
        trade(dec!(88)),
        book(dec!(88)),
        end_game(98, 90),
    ]
}

/// Sample NDJSON feed lines for replay tests
pub mod feed_lines {
    /// A well-formed recording of the scripted game
    pub const SCRIPTED_GAME: &str = concat!(
        r#"{"type":"game","event_type":"START_GAME","home_away":"unknown","home_score":0,"away_score":0,"time_seconds":2880.0}"#,
        "\n",
        r#"{"type":"trade","ticker":"TEAM_A","side":"SELL","quantity":"10","price":"50"}"#,
        "\n",
        r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"25","price":"50"}"#,
        "\n",
        r#"{"type":"game","event_type":"SCORE","home_away":"home","home_score":8,"away_score":2,"player_name":"J. Carter","shot_type":"three_pointer","time_seconds":2400.0}"#,
        "\n",
        r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"25","price":"55"}"#,
        "\n",
        r#"{"type":"game","event_type":"SCORE","home_away":"home","home_score":20,"away_score":10,"time_seconds":1800.0}"#,
        "\n",
        r#"{"type":"trade","ticker":"TEAM_A","side":"SELL","quantity":"10","price":"88"}"#,
        "\n",
        r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"25","price":"88"}"#,
        "\n",
        r#"{"type":"game","event_type":"END_GAME","home_away":"unknown","home_score":98,"away_score":90,"time_seconds":0.0}"#,
        "\n",
    );

    /// Same recording with a corrupt line spliced into the middle
    pub const SCRIPTED_GAME_WITH_GARBAGE: &str = concat!(
        r#"{"type":"trade","ticker":"TEAM_A","side":"SELL","quantity":"10","price":"50"}"#,
        "\n",
        "%%% not json %%%\n",
        r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"25","price":"40"}"#,
        "\n",
    );
}
