use thiserror::Error;

/// Failures of the notification backend calls.
///
/// All three kinds are non-fatal: the caller logs them and leaves the
/// last-known-good display state in place. No automatic retry.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never completed (DNS, connect, transport).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered but refused: non-2xx status, or a
    /// `success: false` body on a mark-read call.
    #[error("server rejected request: {0}")]
    Rejected(String),

    /// The response body could not be parsed as the expected JSON shape.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}
