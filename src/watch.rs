//! Periodic admin session recheck.
//!
//! DESIGN
//! ======
//! A background task wakes every `period`, locks the shared app, rereads the
//! stored admin session, and reports when a session this process held is
//! gone. Missed ticks are skipped rather than replayed, so a suspended
//! process checks once on wake-up. The task ends when the event receiver is
//! dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::admin::SessionCheck;
use crate::commands::App;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The stored session reached its expiry and was purged.
    Expired,
    /// The session disappeared from storage, e.g. a logout from another process.
    LoggedOut,
}

impl SessionEvent {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Expired => "admin session expired; log in again to delete or resolve",
            Self::LoggedOut => "admin session ended",
        }
    }
}

/// Spawn the recheck task. Returns a handle for shutdown.
pub fn spawn_session_watch<S: Storage>(
    app: Arc<Mutex<App<S>>>,
    period: Duration,
    events: mpsc::Sender<SessionEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; the app was just opened.
        interval.tick().await;

        loop {
            interval.tick().await;
            let Some(event) = check_once(&app).await else {
                continue;
            };
            if events.send(event).await.is_err() {
                debug!("session watch receiver dropped; stopping");
                break;
            }
        }
    })
}

/// Run one recheck and report a lost session, if any.
pub async fn check_once<S: Storage>(app: &Mutex<App<S>>) -> Option<SessionEvent> {
    let mut app = app.lock().await;
    let held = app.admin().session().is_some();
    match app.admin_mut().refresh() {
        SessionCheck::Expired => {
            info!("admin session expired during recheck");
            Some(SessionEvent::Expired)
        }
        SessionCheck::LoggedOut if held => {
            info!("admin session no longer stored");
            Some(SessionEvent::LoggedOut)
        }
        SessionCheck::Valid(_) | SessionCheck::LoggedOut => None,
    }
}

#[cfg(test)]
#[path = "watch_test.rs"]
mod tests;
