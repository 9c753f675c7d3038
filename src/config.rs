//! Runtime configuration parsed from environment variables.
//!
//! Optional, all with defaults:
//! - `REPORTVOICE_DATA_DIR`: storage directory, default `.reportvoice`
//! - `REPORTVOICE_SESSION_CHECK_SECS`: admin session recheck period, default 60
//! - `REPORTVOICE_ADMIN_USERNAME`: default `admin`
//! - `REPORTVOICE_ADMIN_PASSWORD_SHA256`: hex digest of the admin password,
//!   default digest of `admin123!`
//!
//! Malformed values fall back to the default with a warning; nothing here
//! fails.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::admin::{AdminCredentials, DEFAULT_ADMIN_PASSWORD_SHA256, DEFAULT_ADMIN_USERNAME};

pub const DATA_DIR_ENV: &str = "REPORTVOICE_DATA_DIR";
pub const SESSION_CHECK_SECS_ENV: &str = "REPORTVOICE_SESSION_CHECK_SECS";
pub const ADMIN_USERNAME_ENV: &str = "REPORTVOICE_ADMIN_USERNAME";
pub const ADMIN_PASSWORD_SHA256_ENV: &str = "REPORTVOICE_ADMIN_PASSWORD_SHA256";

pub const DEFAULT_DATA_DIR: &str = ".reportvoice";
pub const DEFAULT_SESSION_CHECK_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub session_check: Duration,
    pub admin: AdminCredentials,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get(DATA_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let secs = env_parse_u64(get(SESSION_CHECK_SECS_ENV), SESSION_CHECK_SECS_ENV, DEFAULT_SESSION_CHECK_SECS);
        let username = get(ADMIN_USERNAME_ENV).unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_owned());
        let digest = match get(ADMIN_PASSWORD_SHA256_ENV) {
            Some(d) if is_sha256_hex(&d) => d,
            Some(_) => {
                warn!(var = ADMIN_PASSWORD_SHA256_ENV, "not a 64-char hex digest; using default");
                DEFAULT_ADMIN_PASSWORD_SHA256.to_owned()
            }
            None => DEFAULT_ADMIN_PASSWORD_SHA256.to_owned(),
        };

        Self {
            data_dir,
            session_check: Duration::from_secs(secs.max(1)),
            admin: AdminCredentials::new(username, &digest),
        }
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}

fn env_parse_u64(raw: Option<String>, key: &str, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            warn!(var = key, value = %raw, default, "invalid integer; using default");
            default
        }
    }
}

fn is_sha256_hex(s: &str) -> bool {
    let s = s.trim();
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
