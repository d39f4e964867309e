use clap::{Parser, Subcommand};

/// EventHub — notification sync client
#[derive(Parser)]
#[command(name = "eventhub-notify", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the notification list once and render it
    Fetch,

    /// Fetch and re-render on an interval
    Watch {
        /// Seconds between refreshes
        #[arg(short, long, default_value = "60")]
        interval: u64,
    },

    /// Mark a notification as read
    MarkRead {
        /// Notification id, numeric or opaque string
        id: String,
    },
}
