use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque notification identifier. The backend hands out numeric ids but the
/// JSON layer sometimes carries them as strings; both compare stably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationId::Int(n) => write!(f, "{}", n),
            NotificationId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NotificationId {
    fn from(n: i64) -> Self {
        NotificationId::Int(n)
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        NotificationId::Text(s.to_string())
    }
}

/// Notification category. Unknown strings collapse to `Other`, which renders
/// with the default info icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NotificationType {
    Event,
    Club,
    Announcement,
    Reminder,
    #[default]
    Other,
}

impl From<String> for NotificationType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "event" => NotificationType::Event,
            "club" => NotificationType::Club,
            "announcement" => NotificationType::Announcement,
            "reminder" => NotificationType::Reminder,
            _ => NotificationType::Other,
        }
    }
}

/// A server-originated notification, observed client-side as an immutable
/// snapshot per fetch. `read` transitions only false→true, and only after
/// the backend confirms the mark-read call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationType,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        alias = "dateSent",
        deserialize_with = "de_timestamp"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

/// Accepts RFC 3339 (`2026-08-30T10:00:00Z`) as well as the offset-less
/// datetimes the backend emits for `dateSent` (`2026-08-30T10:00:00`),
/// which are taken as UTC.
fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Response to `POST /notifications/{id}/read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The two wire shapes the backend serves: the newer endpoint wraps the list
/// and may include a precomputed unread count, the legacy one returns a bare
/// array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FetchPayload {
    Wrapped {
        notifications: Vec<Notification>,
        #[serde(default, rename = "unreadCount", alias = "unread_count")]
        unread_count: Option<usize>,
    },
    Bare(Vec<Notification>),
}

/// Normalized fetch result: the ordered notification list plus the server's
/// unread count when it supplied one.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: Option<usize>,
}

impl From<FetchPayload> for FetchResponse {
    fn from(payload: FetchPayload) -> Self {
        match payload {
            FetchPayload::Wrapped {
                notifications,
                unread_count,
            } => FetchResponse {
                notifications,
                unread_count,
            },
            FetchPayload::Bare(notifications) => FetchResponse {
                notifications,
                unread_count: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_integer_and_string() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 42, "title": "t", "message": "m", "type": "event",
                "createdAt": "2026-08-30T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(n.id, NotificationId::Int(42));

        let n: Notification = serde_json::from_str(
            r#"{"id": "n-42", "title": "t", "message": "m", "type": "event",
                "createdAt": "2026-08-30T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(n.id, NotificationId::Text("n-42".into()));
    }

    #[test]
    fn test_unknown_type_collapses_to_other() {
        assert_eq!(
            NotificationType::from("payment_due".to_string()),
            NotificationType::Other
        );
        assert_eq!(
            NotificationType::from("EVENT".to_string()),
            NotificationType::Event
        );
    }

    #[test]
    fn test_missing_type_defaults_to_other() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 1, "title": "t", "message": "m",
                "createdAt": "2026-08-30T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(n.kind, NotificationType::Other);
        assert!(!n.read);
    }

    #[test]
    fn test_date_sent_alias_without_offset() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 1, "title": "t", "message": "m", "type": "reminder",
                "dateSent": "2026-08-30T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(n.created_at.to_rfc3339(), "2026-08-30T10:00:00+00:00");
    }

    #[test]
    fn test_wrapped_payload_with_count() {
        let payload: FetchPayload = serde_json::from_str(
            r#"{"notifications": [
                  {"id": 1, "title": "a", "message": "m", "type": "club",
                   "createdAt": "2026-08-30T10:00:00Z", "read": false}
                ],
                "unreadCount": 1}"#,
        )
        .unwrap();
        let resp = FetchResponse::from(payload);
        assert_eq!(resp.notifications.len(), 1);
        assert_eq!(resp.unread_count, Some(1));
    }

    #[test]
    fn test_bare_array_payload() {
        let payload: FetchPayload = serde_json::from_str(
            r#"[{"id": 1, "title": "a", "message": "m", "type": "club",
                 "dateSent": "2026-08-30T10:00:00", "read": true}]"#,
        )
        .unwrap();
        let resp = FetchResponse::from(payload);
        assert_eq!(resp.notifications.len(), 1);
        assert_eq!(resp.unread_count, None);
        assert!(resp.notifications[0].read);
    }
}
