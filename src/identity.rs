//! Per-client voter identifier.
//!
//! The identifier is an opaque 9-character base-36 token, generated on first
//! use and persisted so later runs vote as the same client. It is not an
//! identity: nothing stops two clients from presenting the same token.

use rand::Rng;
use tracing::{info, warn};

use crate::storage::{Storage, USER_ID_KEY};

pub const IDENTIFIER_LEN: usize = 9;
const IDENTIFIER_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[must_use]
pub fn generate_identifier() -> String {
    let mut rng = rand::rng();
    (0..IDENTIFIER_LEN)
        .map(|_| {
            let idx = rng.random_range(0..IDENTIFIER_ALPHABET.len());
            char::from(IDENTIFIER_ALPHABET[idx])
        })
        .collect()
}

/// Return this client's identifier, creating and storing one if needed.
///
/// The value is stored as a bare string, not JSON. Storage failures are
/// logged; the caller still gets a usable identifier for the current process.
pub fn client_identifier<S: Storage>(storage: &S) -> String {
    match storage.get_item(USER_ID_KEY) {
        Ok(Some(raw)) if !raw.trim().is_empty() => return raw.trim().to_owned(),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "stored user identifier unreadable; issuing a new one"),
    }

    let id = generate_identifier();
    match storage.set_item(USER_ID_KEY, &id) {
        Ok(()) => info!(user_identifier = %id, "user identifier issued"),
        Err(e) => warn!(error = %e, "failed to persist user identifier"),
    }
    id
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
