//! Typed application context: configuration, auth, and locale with one
//! startup sequence.
//!
//! ARCHITECTURE
//! ============
//! `new` builds everything that only reads storage (the locale preference) and
//! leaves auth in `Loading`. `start` performs the single `Loading -> resolved`
//! transition and reconciles the locale against the loaded user. The app shell
//! calls `start` from an effect, so server-rendered HTML always shows the
//! loading state and the client resolves it once after hydration.
//!
//! Every operation that changes the current user goes through this type and
//! re-reconciles the locale, so the two coordinators cannot disagree.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use crate::config::PortalConfig;
use crate::net::types::{Language, Role, User};
use crate::state::auth::{AuthCoordinator, AuthState};
use crate::state::locale::LocaleCoordinator;
use crate::state::preference_sync;
use crate::state::session::{Session, SessionStore};
use crate::util::auth::{GuardDecision, decide};
use crate::util::storage::{BrowserStore, KeyValueStore};

#[derive(Clone, Debug)]
pub struct AppContext<S> {
    config: PortalConfig,
    auth: AuthCoordinator<S>,
    locale: LocaleCoordinator<S>,
}

impl<S: KeyValueStore + Clone> AppContext<S> {
    /// Construct storage-backed coordinators; auth stays `Loading`.
    pub fn new(storage: S, config: PortalConfig) -> Self {
        let auth = AuthCoordinator::new(SessionStore::new(storage.clone()));
        let locale = LocaleCoordinator::with_fallback(storage, None, config.default_language);
        Self { config, auth, locale }
    }

    /// `new` followed by `start`.
    pub fn init(storage: S, config: PortalConfig) -> Self {
        let mut ctx = Self::new(storage, config);
        ctx.start();
        ctx
    }

    /// Resolve auth from storage and reconcile the locale. Only the first call
    /// after `new`/`teardown` changes anything.
    pub fn start(&mut self) -> AuthState {
        if self.auth.is_loading() {
            self.auth.mount();
            self.locale.reconcile(self.auth.user());
        }
        self.auth.state()
    }

    /// Forget in-memory auth so a later `start` re-reads storage. Persisted
    /// data is untouched.
    pub fn teardown(&mut self) {
        self.auth.reset();
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn auth(&self) -> &AuthCoordinator<S> {
        &self.auth
    }

    pub fn locale(&self) -> &LocaleCoordinator<S> {
        &self.locale
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth.state()
    }

    pub fn language(&self) -> Language {
        self.locale.language()
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.locale.t(key)
    }

    pub fn guard(&self, required: &[Role]) -> GuardDecision {
        decide(&self.auth.state(), required)
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.auth.set_user(user);
        self.locale.reconcile(self.auth.user());
    }

    pub fn login(&mut self, session: Session) {
        self.auth.login(session);
        self.locale.reconcile(self.auth.user());
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    /// Local language change. The server-side push is the caller's
    /// fire-and-forget concern (`preference_sync::spawn_language_sync`).
    pub fn set_language(&mut self, lang: Language) {
        self.locale.set_language(lang);
    }

    /// Apply a user returned by a preference sync, unless it is stale.
    pub fn apply_synced_user(&mut self, user: User) -> bool {
        let applied = preference_sync::apply_synced_user(&mut self.auth, user);
        if applied {
            self.locale.reconcile(self.auth.user());
        }
        applied
    }
}

/// Context signal the app shell provides to every view.
pub type PortalContext = leptos::prelude::RwSignal<AppContext<BrowserStore>>;
