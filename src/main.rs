use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod center;
mod cli;
mod client;
mod config;
mod errors;
mod models;
mod render;
mod sink;

use center::{MarkReadOutcome, NotificationCenter};
use client::NotificationClient;
use models::NotificationId;
use sink::TerminalSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "eventhub_notify=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let client = NotificationClient::new(&cfg);
    let center = NotificationCenter::new(client, Arc::new(TerminalSink));

    match args.command {
        // On-load behavior: one best-effort fetch.
        None | Some(cli::Commands::Fetch) => {
            // Failure is non-fatal; it was already logged and the display
            // keeps its last-known-good (here: empty) state.
            let _ = center.refresh().await;
        }
        Some(cli::Commands::Watch { interval }) => {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
            loop {
                ticker.tick().await;
                let _ = center.refresh().await;
            }
        }
        Some(cli::Commands::MarkRead { id }) => {
            let id = parse_id(&id);
            let _ = center.refresh().await;
            match center.mark_read(&id).await {
                Ok(MarkReadOutcome::Confirmed) => {
                    println!("Notification {} marked read.", id);
                }
                Ok(MarkReadOutcome::AlreadyRead) => {
                    println!("Notification {} is already read.", id);
                }
                Ok(MarkReadOutcome::Suppressed) => {
                    println!("A mark-read for {} is already in progress.", id);
                }
                // The center already surfaced a notice; just exit nonzero.
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> NotificationId {
    raw.parse::<i64>()
        .map(NotificationId::Int)
        .unwrap_or_else(|_| NotificationId::Text(raw.to_string()))
}
