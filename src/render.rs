use chrono::{DateTime, Utc};

use crate::models::{Notification, NotificationId, NotificationType};

/// One rendered notification, ready for a display sink. Items keep the
/// order of the fetched list exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: NotificationId,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub relative_time: String,
    pub unread: bool,
}

/// Fixed type→icon mapping; anything outside it gets the info icon.
pub fn icon_for(kind: NotificationType) -> &'static str {
    match kind {
        NotificationType::Event => "fa-calendar-alt",
        NotificationType::Club => "fa-users",
        NotificationType::Announcement => "fa-bullhorn",
        NotificationType::Reminder => "fa-bell",
        NotificationType::Other => "fa-info-circle",
    }
}

/// Render a notification list into display items, preserving input order.
/// No sorting, no deduplication. `now` is passed in so time bucketing is
/// deterministic under test.
pub fn render_list(notifications: &[Notification], now: DateTime<Utc>) -> Vec<DisplayItem> {
    notifications
        .iter()
        .map(|n| DisplayItem {
            id: n.id.clone(),
            icon: icon_for(n.kind),
            title: n.title.clone(),
            message: n.message.clone(),
            relative_time: format_relative_time(n.created_at, now),
            unread: !n.read,
        })
        .collect()
}

/// Human-relative age of a timestamp: "just now" under a minute, then
/// minutes, hours, and days, switching to an absolute date at a week.
/// Timestamps in the future clamp to "just now".
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created_at);

    if age.num_seconds() < 60 {
        return "just now".to_string();
    }
    if age.num_minutes() < 60 {
        return format!("{} minutes ago", age.num_minutes());
    }
    if age.num_hours() < 24 {
        return format!("{} hours ago", age.num_hours());
    }
    if age.num_days() < 7 {
        return format!("{} days ago", age.num_days());
    }
    created_at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn notif(id: i64, kind: NotificationType, read: bool, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id: id.into(),
            title: format!("title {}", id),
            message: format!("message {}", id),
            kind,
            created_at,
            read,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_item_count_and_order_match_input() {
        let list = vec![
            notif(3, NotificationType::Event, false, now()),
            notif(1, NotificationType::Club, true, now()),
            notif(2, NotificationType::Reminder, false, now()),
        ];
        let items = render_list(&list, now());
        assert_eq!(items.len(), 3);
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![3.into(), 1.into(), 2.into()]);
    }

    #[test]
    fn test_unread_marker_follows_read_flag() {
        let list = vec![
            notif(1, NotificationType::Event, false, now()),
            notif(2, NotificationType::Event, true, now()),
        ];
        let items = render_list(&list, now());
        assert!(items[0].unread);
        assert!(!items[1].unread);
    }

    #[test]
    fn test_known_types_map_to_fixed_icons() {
        assert_eq!(icon_for(NotificationType::Event), "fa-calendar-alt");
        assert_eq!(icon_for(NotificationType::Club), "fa-users");
        assert_eq!(icon_for(NotificationType::Announcement), "fa-bullhorn");
        assert_eq!(icon_for(NotificationType::Reminder), "fa-bell");
    }

    #[test]
    fn test_unknown_type_gets_default_icon() {
        assert_eq!(icon_for(NotificationType::Other), "fa-info-circle");
        let list = vec![notif(1, NotificationType::Other, false, now())];
        assert_eq!(render_list(&list, now())[0].icon, "fa-info-circle");
    }

    #[test]
    fn test_thirty_seconds_is_just_now() {
        let t = now() - Duration::seconds(30);
        assert_eq!(format_relative_time(t, now()), "just now");
    }

    #[test]
    fn test_five_minutes_ago() {
        let t = now() - Duration::minutes(5);
        assert_eq!(format_relative_time(t, now()), "5 minutes ago");
    }

    #[test]
    fn test_three_hours_ago() {
        let t = now() - Duration::hours(3);
        assert_eq!(format_relative_time(t, now()), "3 hours ago");
    }

    #[test]
    fn test_two_days_ago() {
        let t = now() - Duration::days(2);
        assert_eq!(format_relative_time(t, now()), "2 days ago");
    }

    #[test]
    fn test_week_old_falls_back_to_absolute_date() {
        let t = now() - Duration::days(8);
        assert_eq!(format_relative_time(t, now()), "Aug 22, 2026");
    }

    #[test]
    fn test_future_timestamp_clamps_to_just_now() {
        let t = now() + Duration::minutes(10);
        assert_eq!(format_relative_time(t, now()), "just now");
    }
}
