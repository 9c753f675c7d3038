//! Admin session gate.
//!
//! ARCHITECTURE
//! ============
//! Admin access is a local convenience gate: one fixed credential pair and a
//! seven-day session object kept in the client's storage. It has no
//! cryptographic integrity; anyone who can edit the data directory can forge
//! a session. Do not reuse it to protect anything reachable over a network.
//!
//! TRADE-OFFS
//! ==========
//! The password is compared as a SHA-256 digest so configuration never needs
//! the plaintext. Both halves of the pair are always checked and a
//! failure reports one generic error, so callers cannot tell an unknown user
//! from a wrong password.

use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::model::AdminSession;
use crate::storage::{ADMIN_SESSION_KEY, Storage, load_json, save_json};

pub const SESSION_TTL: Duration = Duration::days(7);

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// SHA-256 of the default password `admin123!`.
pub const DEFAULT_ADMIN_PASSWORD_SHA256: &str = "5c06eb3d5a05a19f49476d694ca81a36344660e9d5b98e3d6a6630f31c2422e7";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("admin login required")]
    NotLoggedIn,
}

/// Result of rereading the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Valid(AdminSession),
    /// Nothing usable was stored.
    LoggedOut,
    /// A stored session had lapsed and was purged.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    /// Lowercase hex SHA-256 of the password.
    pub password_sha256: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD_SHA256)
    }
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password_sha256: &str) -> Self {
        Self { username: username.into(), password_sha256: password_sha256.trim().to_ascii_lowercase() }
    }

    /// Exact match on both halves of the pair.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username == username;
        let password_ok = hash_password(password) == self.password_sha256;
        user_ok & password_ok
    }
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Human-readable time left: `"3d 4h"`, `"4h 12m"`, `"12m"` or `"expired"`.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    if remaining <= Duration::ZERO {
        return "expired".to_owned();
    }
    let days = remaining.whole_days();
    let hours = remaining.whole_hours() % 24;
    let minutes = remaining.whole_minutes() % 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

// =============================================================================
// GATE
// =============================================================================

pub struct AdminGate<S: Storage> {
    storage: S,
    credentials: AdminCredentials,
    session: Option<AdminSession>,
}

impl<S: Storage> AdminGate<S> {
    /// Open the gate and pick up any still-valid stored session.
    #[must_use]
    pub fn open(storage: S, credentials: AdminCredentials) -> Self {
        let mut gate = Self { storage, credentials, session: None };
        gate.refresh();
        gate
    }

    #[must_use]
    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    fn purge(&mut self) {
        self.session = None;
        if let Err(e) = self.storage.remove_item(ADMIN_SESSION_KEY) {
            warn!(error = %e, "failed to purge admin session");
        }
    }

    fn store(&mut self, session: AdminSession) {
        if let Err(e) = save_json(&self.storage, ADMIN_SESSION_KEY, &session) {
            warn!(error = %e, "failed to persist admin session");
        }
        self.session = Some(session);
    }

    /// Reread the stored session, purging anything expired or unreadable.
    pub fn refresh(&mut self) -> SessionCheck {
        self.refresh_at(OffsetDateTime::now_utc())
    }

    pub(crate) fn refresh_at(&mut self, now: OffsetDateTime) -> SessionCheck {
        match load_json::<_, AdminSession>(&self.storage, ADMIN_SESSION_KEY) {
            Ok(Some(session)) if session.is_valid_at(now) => {
                self.session = Some(session);
                SessionCheck::Valid(session)
            }
            Ok(Some(session)) => {
                self.purge();
                if session.is_logged_in {
                    info!(expired_at = %session.expires_at, "admin session expired");
                    SessionCheck::Expired
                } else {
                    SessionCheck::LoggedOut
                }
            }
            Ok(None) => {
                self.session = None;
                SessionCheck::LoggedOut
            }
            Err(e) => {
                warn!(error = %e, "admin session unreadable; purging");
                self.purge();
                SessionCheck::LoggedOut
            }
        }
    }

    /// Log in with the configured pair; the session lasts [`SESSION_TTL`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any mismatch. No session
    /// is written in that case.
    pub fn login(&mut self, username: &str, password: &str) -> Result<AdminSession, AuthError> {
        self.login_at(username, password, OffsetDateTime::now_utc())
    }

    pub(crate) fn login_at(
        &mut self,
        username: &str,
        password: &str,
        now: OffsetDateTime,
    ) -> Result<AdminSession, AuthError> {
        if !self.credentials.verify(username, password) {
            warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = AdminSession { is_logged_in: true, login_time: now, expires_at: now + SESSION_TTL };
        self.store(session);
        info!(expires_at = %session.expires_at, "admin logged in");
        Ok(session)
    }

    pub fn logout(&mut self) {
        self.purge();
        info!("admin logged out");
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(OffsetDateTime::now_utc())
    }

    #[must_use]
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.session.is_some_and(|s| s.is_valid_at(now))
    }

    /// Gate an admin-only action. A lapsed session is purged on the way out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] without a valid session.
    pub fn require(&mut self) -> Result<(), AuthError> {
        self.require_at(OffsetDateTime::now_utc())
    }

    pub(crate) fn require_at(&mut self, now: OffsetDateTime) -> Result<(), AuthError> {
        if self.is_valid_at(now) {
            return Ok(());
        }
        if self.session.is_some() {
            self.purge();
        }
        Err(AuthError::NotLoggedIn)
    }

    /// Push expiry out to now + [`SESSION_TTL`], keeping the login time.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] without a valid session.
    pub fn extend(&mut self) -> Result<AdminSession, AuthError> {
        self.extend_at(OffsetDateTime::now_utc())
    }

    pub(crate) fn extend_at(&mut self, now: OffsetDateTime) -> Result<AdminSession, AuthError> {
        self.require_at(now)?;
        let Some(current) = self.session else {
            return Err(AuthError::NotLoggedIn);
        };

        let extended = AdminSession { expires_at: now + SESSION_TTL, ..current };
        self.store(extended);
        info!(expires_at = %extended.expires_at, "admin session extended");
        Ok(extended)
    }

    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.time_remaining_at(OffsetDateTime::now_utc())
    }

    #[must_use]
    pub fn time_remaining_at(&self, now: OffsetDateTime) -> Duration {
        match self.session {
            Some(s) if s.is_logged_in => (s.expires_at - now).max(Duration::ZERO),
            _ => Duration::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
