//! Best-effort push of the language preference to the user's server record.
//!
//! TRADE-OFFS
//! ==========
//! The local change made by `LocaleCoordinator::set_language` is authoritative.
//! The push runs as a detached task: nobody awaits it, it is never cancelled or
//! retried, and a failure is only logged. A response that lands after logout or
//! after a different user signed in is discarded.

#[cfg(test)]
#[path = "preference_sync_test.rs"]
mod preference_sync_test;

use std::future::Future;

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::net::api::{self, ApiError};
use crate::net::types::{Language, User};
use crate::state::auth::AuthCoordinator;
use crate::state::boundary::PortalContext;
use crate::util::storage::KeyValueStore;

/// Server call that stores a language preference and returns the updated user.
pub trait PreferenceApi {
    fn update_language(&self, token: &str, lang: Language) -> impl Future<Output = Result<User, ApiError>>;
}

/// `PreferenceApi` over the portal REST endpoint.
#[derive(Clone, Debug)]
pub struct HttpPreferenceApi {
    config: PortalConfig,
}

impl HttpPreferenceApi {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }
}

impl PreferenceApi for HttpPreferenceApi {
    async fn update_language(&self, token: &str, lang: Language) -> Result<User, ApiError> {
        api::update_language(&self.config, token, lang).await
    }
}

/// Push `lang`; returns the updated user, or `None` after logging the failure.
pub async fn sync_language<A: PreferenceApi>(api: &A, token: &str, lang: Language) -> Option<User> {
    match api.update_language(token, lang).await {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("language preference sync failed: {e}");
            None
        }
    }
}

/// Apply a synced user record if it still belongs to the signed-in user.
/// The persisted snapshot is refreshed too, so the next startup sees the
/// new language instead of the pre-sync one.
pub fn apply_synced_user<S: KeyValueStore>(auth: &mut AuthCoordinator<S>, user: User) -> bool {
    if !auth.user().is_some_and(|current| current.id == user.id) {
        leptos::logging::log!("dropping stale language sync for user {}", user.id);
        return false;
    }
    auth.store().write_user(&user);
    auth.set_user(Some(user));
    true
}

/// Run `future` without awaiting it. Outside the browser there is no event
/// loop to run it on, so it is dropped.
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "hydrate"))]
    drop(future);
}

/// Fire-and-forget sync for the signed-in user, if any.
pub fn spawn_language_sync(ctx: PortalContext, lang: Language) {
    let Some((config, token)) =
        ctx.with_untracked(|c| c.auth().token().map(|token| (c.config().clone(), token.to_owned())))
    else {
        return;
    };
    spawn_detached(async move {
        let api = HttpPreferenceApi::new(config);
        if let Some(user) = sync_language(&api, &token, lang).await {
            // The signal is gone if the app shell was torn down meanwhile.
            let _ = ctx.try_update(|c| c.apply_synced_user(user));
        }
    });
}
