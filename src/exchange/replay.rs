//! Replay feed for recorded games

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::messages;
use crate::common::errors::Result;
use crate::common::traits::EventFeed;
use crate::common::types::MarketEvent;

/// Streams a recorded game file through the event channel
///
/// Lines are forwarded in file order. Blank lines are skipped; malformed
/// lines are logged and skipped so one bad record cannot kill a replay.
pub struct ReplayFeed {
    path: PathBuf,
}

impl ReplayFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventFeed for ReplayFeed {
    async fn start(&mut self, sender: mpsc::Sender<MarketEvent>) -> Result<()> {
        info!("Replaying recorded feed from {}", self.path.display());

        let file = File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();

        let mut forwarded: u64 = 0;
        let mut skipped: u64 = 0;
        let mut line_no: u64 = 0;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let record = match messages::parse_line(trimmed) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping malformed record at line {}: {}", line_no, e);
                    skipped += 1;
                    continue;
                }
            };

            if sender.send(MarketEvent::from(record)).await.is_err() {
                debug!("Event receiver dropped, stopping replay early");
                break;
            }
            forwarded += 1;
        }

        info!(
            "Replay finished: {} events forwarded, {} malformed lines skipped",
            forwarded, skipped
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Temp feed file removed on drop
    struct TempFeed(PathBuf);

    impl Drop for TempFeed {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn write_temp_feed(name: &str, contents: &str) -> TempFeed {
        let mut path = std::env::temp_dir();
        path.push(format!("courtside-replay-{}-{}.ndjson", std::process::id(), name));
        std::fs::write(&path, contents).expect("write temp feed");
        TempFeed(path)
    }

    #[tokio::test]
    async fn test_replay_forwards_events_in_order() {
        let feed_file = write_temp_feed(
            "in-order",
            concat!(
                r#"{"type":"game","event_type":"START_GAME","home_away":"unknown","home_score":0,"away_score":0,"time_seconds":2880.0}"#,
                "\n",
                r#"{"type":"book","ticker":"TEAM_A","side":"BUY","quantity":"10","price":"50"}"#,
                "\n",
                "\n",
                r#"{"type":"trade","ticker":"TEAM_A","side":"SELL","quantity":"5","price":"49"}"#,
                "\n",
            ),
        );

        let mut feed = ReplayFeed::new(&feed_file.0);
        let (tx, mut rx) = mpsc::channel(16);
        feed.start(tx).await.unwrap();

        let kinds: Vec<&str> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|e| e.kind())
            .collect();
        assert_eq!(kinds, vec!["game", "book", "trade"]);
    }

    #[tokio::test]
    async fn test_replay_survives_malformed_lines() {
        let feed_file = write_temp_feed(
            "malformed",
            concat!(
                "this line is garbage\n",
                r#"{"type":"book","ticker":"TEAM_A","side":"SELL","quantity":"10","price":"52"}"#,
                "\n",
            ),
        );

        let mut feed = ReplayFeed::new(&feed_file.0);
        let (tx, mut rx) = mpsc::channel(16);
        feed.start(tx).await.unwrap();

        assert_eq!(rx.try_recv().unwrap().kind(), "book");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_replay_missing_file_is_an_error() {
        let mut feed = ReplayFeed::new("/definitely/not/here.ndjson");
        let (tx, _rx) = mpsc::channel(1);
        assert!(feed.start(tx).await.is_err());
    }
}
