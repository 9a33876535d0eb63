//! Courtside - Main Entry Point
//!
//! Replays a recorded game through the fair-value strategy and reports what
//! the strategy would have done.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use courtside::common::channels::create_event_channel_with_size;
use courtside::common::traits::EventFeed;
use courtside::config;
use courtside::engine::Engine;
use courtside::exchange::{PaperGateway, ReplayFeed};
use courtside::strategy::FairValueStrategy;

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Recorded game to replay (overrides the config file)
    #[arg(long)]
    replay: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting courtside");
    info!("Configuration file: {}", args.config);

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let app_config = config::load_config(Some(&args.config))?;

    let replay_path = match args.replay.or(app_config.feed.replay_path.clone()) {
        Some(path) => path,
        None => bail!("No replay file given; pass --replay or set feed.replay_path"),
    };

    let (event_tx, event_rx) = create_event_channel_with_size(app_config.settings.channel_capacity);

    let strategy = FairValueStrategy::new(&app_config.model, &app_config.strategy);
    let gateway =
        PaperGateway::new(app_config.strategy.starting_capital).with_fill_sender(&event_tx);
    let mut engine = Engine::new(Box::new(strategy), gateway);

    // Feed task owns the sender; the engine stops when the channel closes
    let mut feed = ReplayFeed::new(&replay_path);
    let feed_handle = tokio::spawn(async move {
        if let Err(e) = feed.start(event_tx).await {
            tracing::error!("Feed failed: {}", e);
        }
    });

    let report = engine.run(event_rx).await;
    feed_handle.await?;

    info!(
        "Replay complete: {} events ({} book, {} trade, {} fill, {} game), {} orders placed",
        report.total_events(),
        report.book_events,
        report.trade_events,
        report.fill_events,
        report.game_events,
        report.orders_placed
    );
    info!("Final paper capital: {}", engine.gateway().capital());

    Ok(())
}
