//! Wire format of recorded feed files
//!
//! Recorded games are NDJSON: one record per line, tagged by `type`. The
//! record layout is kept separate from [`crate::common::types`] so the on-disk
//! format can evolve without touching the unified event model.

use serde::{Deserialize, Serialize};

use crate::common::errors::Result;
use crate::common::types::{AccountFill, BookTick, GameEvent, MarketEvent, TradeTick};

/// A single line of a recorded feed file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedRecord {
    /// Orderbook level update
    Book(BookTick),
    /// Execution print
    Trade(TradeTick),
    /// Own-order fill
    Fill(AccountFill),
    /// Game state event
    Game(GameEvent),
}

impl From<FeedRecord> for MarketEvent {
    fn from(record: FeedRecord) -> Self {
        match record {
            FeedRecord::Book(tick) => MarketEvent::Book(tick),
            FeedRecord::Trade(tick) => MarketEvent::Trade(tick),
            FeedRecord::Fill(fill) => MarketEvent::Fill(fill),
            FeedRecord::Game(event) => MarketEvent::Game(event),
        }
    }
}

/// Parse one NDJSON line into a feed record
pub fn parse_line(line: &str) -> Result<FeedRecord> {
    Ok(serde_json::from_str(line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::{GameEventType, Side, TeamSide, Ticker};
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_book_record() {
        let line = r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"25","price":"58"}"#;
        match parse_line(line).unwrap() {
            FeedRecord::Book(tick) => {
                assert_eq!(tick.ticker, Ticker::TeamA);
                assert_eq!(tick.side, Side::Buy);
                assert_eq!(tick.quantity, dec!(25));
                assert_eq!(tick.price, dec!(58));
            }
            other => panic!("expected book record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_game_record_with_sparse_fields() {
        let line = r#"{"type":"game","event_type":"SCORE","home_away":"home","home_score":12,"away_score":8,"player_name":"J. Carter","shot_type":"three_pointer","time_seconds":2410.5}"#;
        match parse_line(line).unwrap() {
            FeedRecord::Game(event) => {
                assert_eq!(event.event_type, GameEventType::Score);
                assert_eq!(event.home_away, TeamSide::Home);
                assert_eq!(event.home_score, 12);
                assert_eq!(event.player_name.as_deref(), Some("J. Carter"));
                assert_eq!(event.time_seconds, Some(2410.5));
                assert!(event.rebound_type.is_none());
            }
            other => panic!("expected game record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fill_record() {
        let line = r#"{"type":"fill","ticker":"TEAM_A","side":"SELL","price":"61","quantity":"100","capital_remaining":"101100"}"#;
        match parse_line(line).unwrap() {
            FeedRecord::Fill(fill) => {
                assert_eq!(fill.capital_remaining, dec!(101100));
            }
            other => panic!("expected fill record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("not json at all").is_err());
        assert!(parse_line(r#"{"type":"quote"}"#).is_err());
    }
}
