use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::Config;
use crate::errors::NotifyError;
use crate::models::notification::FetchPayload;
use crate::models::{FetchResponse, MarkReadAck, NotificationId};

/// HTTP client for the notification endpoints of the EventHub backend.
///
/// Every request carries `X-Requested-With: XMLHttpRequest` so the backend
/// can tell programmatic calls from full page navigations. Calls are
/// fire-once: no retry, no backoff, no client-side timeout (transport
/// defaults apply).
#[derive(Clone)]
pub struct NotificationClient {
    client: reqwest::Client,
    api_endpoint: String,
}

impl NotificationClient {
    pub fn new(config: &Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        Self {
            client: reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .default_headers(headers)
                .build()
                .expect("failed to build notification HTTP client"),
            api_endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {apiEndpoint}/notifications` — the current notification list and,
    /// when the backend provides one, the unread count.
    ///
    /// The body is read as text and parsed separately so a transport failure
    /// and a malformed body surface as distinct error kinds.
    pub async fn fetch_notifications(&self) -> Result<FetchResponse, NotifyError> {
        let url = format!("{}/notifications", self.api_endpoint);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(NotifyError::Rejected(format!(
                "GET /notifications returned {}",
                status
            )));
        }

        let payload: FetchPayload = serde_json::from_str(&body)?;
        let fetched = FetchResponse::from(payload);
        tracing::debug!(
            count = fetched.notifications.len(),
            unread_count = ?fetched.unread_count,
            "fetched notification list"
        );
        Ok(fetched)
    }

    /// `POST {apiEndpoint}/notifications/{id}/read` — mark one notification
    /// read. A `success: false` body counts as a rejection.
    pub async fn mark_read(&self, id: &NotificationId) -> Result<(), NotifyError> {
        let url = format!("{}/notifications/{}/read", self.api_endpoint, id);
        let resp = self.client.post(&url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(NotifyError::Rejected(format!(
                "mark-read for {} returned {}",
                id, status
            )));
        }

        let ack: MarkReadAck = serde_json::from_str(&body)?;
        if !ack.success {
            return Err(NotifyError::Rejected(
                ack.message
                    .unwrap_or_else(|| "backend reported success=false".into()),
            ));
        }

        tracing::debug!(%id, "mark-read confirmed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_is_normalized() {
        let client = NotificationClient::new(&Config::for_endpoint("http://host/api/"));
        assert_eq!(client.api_endpoint, "http://host/api");
    }
}
