use std::sync::{Arc, Mutex};

use chrono::Utc;
use dashmap::DashSet;

use crate::client::NotificationClient;
use crate::errors::NotifyError;
use crate::models::{Notification, NotificationId};
use crate::render;
use crate::sink::{DisplaySink, NoticeLevel};

/// Outcome of a mark-read attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkReadOutcome {
    /// The backend confirmed; local state and badge were updated.
    Confirmed,
    /// A request for this id is still outstanding; no second call issued.
    Suppressed,
    /// The notification is already read locally; read is absorbing.
    AlreadyRead,
}

/// Drives the notification sync loop: fetch → render + badge on refresh,
/// user action → mark-read → badge on read.
///
/// Holds the single in-memory notification list, replaced wholesale on each
/// fetch. Cloneable handle; all clones share state. The list mutex is never
/// held across an await, so response continuations mutate it one at a time.
#[derive(Clone)]
pub struct NotificationCenter {
    client: NotificationClient,
    sink: Arc<dyn DisplaySink>,
    state: Arc<Mutex<Vec<Notification>>>,
    /// Ids with a mark-read request currently outstanding. A second click
    /// for the same id is suppressed until the first resolves.
    in_flight: Arc<DashSet<NotificationId>>,
    /// Ids whose read state the backend has confirmed. Consulted when a
    /// fetch snapshot arrives, so a stale response cannot revert a
    /// confirmed false→true transition.
    confirmed_read: Arc<DashSet<NotificationId>>,
}

impl NotificationCenter {
    pub fn new(client: NotificationClient, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            client,
            sink,
            state: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(DashSet::new()),
            confirmed_read: Arc::new(DashSet::new()),
        }
    }

    /// Fetch the current list and push it to the sink. Best-effort: on any
    /// failure the previous display state stays in place and the failure is
    /// only logged (background action, not user-initiated).
    pub async fn refresh(&self) -> Result<(), NotifyError> {
        let fetched = match self.client.fetch_notifications().await {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "notification fetch failed, keeping last known state");
                return Err(e);
            }
        };

        let mut list = fetched.notifications;
        let mut reverts_blocked = 0usize;
        for n in &mut list {
            if !n.read && self.confirmed_read.contains(&n.id) {
                n.read = true;
                reverts_blocked += 1;
            }
        }
        if reverts_blocked > 0 {
            tracing::debug!(reverts_blocked, "stale fetch reported confirmed-read ids as unread");
        }

        let derived = list.iter().filter(|n| !n.read).count();
        // A snapshot we had to correct has a stale server count too.
        let count = if reverts_blocked > 0 {
            derived
        } else {
            fetched.unread_count.unwrap_or(derived)
        };

        let items = {
            let mut state = self.state.lock().expect("notification list lock poisoned");
            *state = list;
            render::render_list(&state, Utc::now())
        };
        self.sink.render_list(&items);
        self.sink.set_badge_count(count);
        Ok(())
    }

    /// Mark one notification read. The unread marker is removed and the
    /// badge recomputed only after the backend confirms; on failure the
    /// display keeps its last-known-good state and the user gets a
    /// transient notice (this path is user-initiated).
    pub async fn mark_read(&self, id: &NotificationId) -> Result<MarkReadOutcome, NotifyError> {
        {
            let state = self.state.lock().expect("notification list lock poisoned");
            if state.iter().any(|n| &n.id == id && n.read) {
                return Ok(MarkReadOutcome::AlreadyRead);
            }
        }

        if !self.in_flight.insert(id.clone()) {
            tracing::debug!(%id, "mark-read already outstanding, suppressing");
            return Ok(MarkReadOutcome::Suppressed);
        }

        let result = self.client.mark_read(id).await;
        self.in_flight.remove(id);

        match result {
            Ok(()) => {
                self.confirmed_read.insert(id.clone());
                // Apply to whatever list exists now, not a captured copy.
                let (items, count) = {
                    let mut state =
                        self.state.lock().expect("notification list lock poisoned");
                    if let Some(n) = state.iter_mut().find(|n| &n.id == id) {
                        n.read = true;
                    }
                    let items = render::render_list(&state, Utc::now());
                    let count = state.iter().filter(|n| !n.read).count();
                    (items, count)
                };
                self.sink.render_list(&items);
                self.sink.set_badge_count(count);
                Ok(MarkReadOutcome::Confirmed)
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "mark-read failed, state unchanged");
                self.sink.notice(
                    NoticeLevel::Error,
                    &format!("Could not mark notification {} as read", id),
                );
                Err(e)
            }
        }
    }

    /// Snapshot of the current in-memory list.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state
            .lock()
            .expect("notification list lock poisoned")
            .clone()
    }

    /// Unread count derived from the local list.
    pub fn unread_count(&self) -> usize {
        self.state
            .lock()
            .expect("notification list lock poisoned")
            .iter()
            .filter(|n| !n.read)
            .count()
    }
}
