use crate::render::DisplayItem;

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Wherever rendered notifications end up: a dropdown container, a badge
/// element, and a toast region in the web UI; a terminal here. The sink is
/// only ever called from one response continuation at a time.
pub trait DisplaySink: Send + Sync {
    /// Replace the displayed notification list wholesale.
    fn render_list(&self, items: &[DisplayItem]);

    /// Show the unread count. Zero hides the badge. Idempotent: the same
    /// count twice must produce the same visible result.
    fn set_badge_count(&self, count: usize);

    /// Surface a non-blocking transient notice to the user.
    fn notice(&self, level: NoticeLevel, message: &str);
}

/// Sink for the CLI binary: prints the list and badge to stdout, notices to
/// stderr.
pub struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn render_list(&self, items: &[DisplayItem]) {
        if items.is_empty() {
            println!("No notifications.");
            return;
        }
        for item in items {
            let marker = if item.unread { "●" } else { " " };
            println!(
                "{} [{}] {} — {} ({})",
                marker, item.icon, item.title, item.message, item.relative_time
            );
        }
    }

    fn set_badge_count(&self, count: usize) {
        if count > 0 {
            println!("{} unread", count);
        }
    }

    fn notice(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => eprintln!("notice: {}", message),
            NoticeLevel::Error => eprintln!("error: {}", message),
        }
    }
}
