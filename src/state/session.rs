//! Persisted session: cached user snapshot plus opaque bearer token.
//!
//! DESIGN
//! ======
//! Every read goes through `validate`, which turns the two raw storage values
//! into either a `Session` or a `StorageError`. Anything that is not a valid
//! session is removed from storage on read, so a corrupt entry is seen at most
//! once.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Placeholder values left behind by stringifying missing JS values.
const SENTINELS: [&str; 2] = ["undefined", "null"];

/// A loaded, validated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Why a stored session could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Nothing stored under either key.
    #[error("no session stored")]
    Absent,

    #[error("stored user is missing or a placeholder")]
    MissingUser,

    #[error("stored token is missing or a placeholder")]
    MissingToken,

    #[error("stored user is not valid JSON: {0}")]
    MalformedUser(String),

    #[error("stored user has no id")]
    MissingUserId,

    #[error("stored user has no recognized role")]
    InvalidRole,
}

/// Normalize a raw storage value: empty strings and sentinels count as absent.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !SENTINELS.contains(value))
}

/// Schema check for the raw `user` / `token` pair.
///
/// # Errors
///
/// Returns the first failed requirement; see `StorageError`.
pub fn validate(raw_user: Option<&str>, raw_token: Option<&str>) -> Result<Session, StorageError> {
    let (user_raw, token) = match (present(raw_user), present(raw_token)) {
        (Some(user_raw), Some(token)) => (user_raw, token),
        (None, _) if raw_user.is_none() && raw_token.is_none() => return Err(StorageError::Absent),
        (None, _) => return Err(StorageError::MissingUser),
        (Some(_), None) => return Err(StorageError::MissingToken),
    };

    let user: User = serde_json::from_str(user_raw).map_err(|e| StorageError::MalformedUser(e.to_string()))?;
    if user.id.trim().is_empty() {
        return Err(StorageError::MissingUserId);
    }
    if user.role.is_none() {
        return Err(StorageError::InvalidRole);
    }

    Ok(Session { user, token: token.to_owned() })
}

/// Typed view over the `user` and `token` storage keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load and validate the stored session, clearing storage when it is
    /// present but unusable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Absent` for an empty store, or the validation
    /// failure for a corrupt one (in which case storage has been cleared).
    pub fn read(&self) -> Result<Session, StorageError> {
        let raw_user = self.storage.get(USER_KEY);
        let raw_token = self.storage.get(TOKEN_KEY);
        match validate(raw_user.as_deref(), raw_token.as_deref()) {
            Ok(session) => Ok(session),
            Err(StorageError::Absent) => Err(StorageError::Absent),
            Err(err) => {
                leptos::logging::warn!("discarding stored session: {err}");
                self.clear();
                Err(err)
            }
        }
    }

    /// Persist user snapshot and token.
    pub fn write(&self, session: &Session) {
        self.write_user(&session.user);
        self.storage.set(TOKEN_KEY, &session.token);
    }

    /// Replace only the cached user snapshot.
    pub fn write_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => leptos::logging::warn!("failed to serialize user snapshot: {e}"),
        }
    }

    /// Store a bearer token ahead of the user snapshot (redirect-based login).
    pub fn write_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Remove user snapshot and token. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}
