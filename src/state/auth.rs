//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `AuthCoordinator` is the only writer of
//! session invalidation; everything else observes `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::session::{Session, SessionStore, StorageError, TOKEN_KEY};
use crate::util::storage::KeyValueStore;

/// Snapshot consumers observe. `loading == true` means "decision deferred".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Lifecycle of the in-memory session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthPhase {
    /// Persisted session not yet read.
    #[default]
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

/// Resolves `Loading` to `Unauthenticated` unless the load path assigned a
/// phase first, including when that path unwinds.
struct LoadFinalizer<'a> {
    phase: &'a mut AuthPhase,
}

impl Drop for LoadFinalizer<'_> {
    fn drop(&mut self) {
        if matches!(self.phase, AuthPhase::Loading) {
            *self.phase = AuthPhase::Unauthenticated;
        }
    }
}

/// Owns the in-memory session and its persisted copy.
#[derive(Clone, Debug)]
pub struct AuthCoordinator<S> {
    store: SessionStore<S>,
    phase: AuthPhase,
}

impl<S: KeyValueStore> AuthCoordinator<S> {
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store, phase: AuthPhase::Loading }
    }

    /// Load the persisted session. Runs once; later calls return the
    /// resolved phase unchanged.
    pub fn mount(&mut self) -> &AuthPhase {
        if !matches!(self.phase, AuthPhase::Loading) {
            return &self.phase;
        }

        let finalizer = LoadFinalizer { phase: &mut self.phase };
        match self.store.read() {
            Ok(session) => {
                leptos::logging::log!("restored session for user {}", session.user.id);
                *finalizer.phase = AuthPhase::Authenticated(session);
            }
            Err(StorageError::Absent) => self.store.clear(),
            Err(err) => {
                leptos::logging::warn!("starting unauthenticated: {err}");
                self.store.clear();
            }
        }
        drop(finalizer);

        &self.phase
    }

    /// Replace the in-memory user without persisting it.
    ///
    /// Ignored while `Loading`: only `mount` leaves that phase, so the stored
    /// session is always read first. A user set without a prior session picks
    /// up whatever token is already stored (redirect logins write the token
    /// first).
    pub fn set_user(&mut self, user: Option<User>) {
        if self.is_loading() {
            leptos::logging::warn!("ignoring user change before the stored session was loaded");
            return;
        }
        let Some(user) = user else {
            self.phase = AuthPhase::Unauthenticated;
            return;
        };
        if let AuthPhase::Authenticated(session) = &mut self.phase {
            session.user = user;
            return;
        }
        let token = self.store.storage().get(TOKEN_KEY).unwrap_or_default();
        self.phase = AuthPhase::Authenticated(Session { user, token });
    }

    /// Persist `session` and make it current.
    pub fn login(&mut self, session: Session) {
        self.store.write(&session);
        self.phase = AuthPhase::Authenticated(session);
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn logout(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
        self.store.clear();
    }

    /// Return to `Loading` so the next `mount` re-reads storage.
    pub(crate) fn reset(&mut self) {
        self.phase = AuthPhase::Loading;
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            AuthPhase::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    /// Bearer token for API calls, if a non-empty one is held.
    pub fn token(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Authenticated(session) if !session.token.is_empty() => Some(&session.token),
            _ => None,
        }
    }

    pub fn state(&self) -> AuthState {
        AuthState { user: self.user().cloned(), loading: self.is_loading() }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}
