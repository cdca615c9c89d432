//! Completion page for redirect-based sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server redirects here with `token` and `role` (or `error`) query
//! parameters, plus `suspended`/`hoursRemaining` when the account hit its
//! submission limit. The page stores the token, fetches the user it belongs
//! to, logs in, and forwards to the role's dashboard. A suspended account
//! stays on this page with a notice and a link onward. Every failure lands on
//! `/login`.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::{Role, User};
use crate::state::boundary::PortalContext;
use crate::util::auth::landing_path;

/// What the callback query string asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The provider reported an error.
    Failed(String),
    /// No usable token/role pair.
    MissingToken,
    /// `suspended_hours` is `Some` when the query flags a suspension; the
    /// hour count is 0 when unknown.
    Ready { token: String, role: Option<Role>, suspended_hours: Option<u32> },
}

/// Classify callback query parameters; `get` returns a decoded value by name.
pub fn parse_callback(get: impl Fn(&str) -> Option<String>) -> CallbackOutcome {
    let non_empty = |name: &str| get(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

    if let Some(error) = non_empty("error") {
        return CallbackOutcome::Failed(error);
    }
    let (Some(token), Some(role)) = (non_empty("token"), non_empty("role")) else {
        return CallbackOutcome::MissingToken;
    };
    let suspended = non_empty("suspended").is_some_and(|v| v.eq_ignore_ascii_case("true"));
    let hours = non_empty("hoursRemaining").and_then(|h| h.parse().ok()).unwrap_or(0);
    CallbackOutcome::Ready { token, role: Role::parse(&role), suspended_hours: suspended.then_some(hours) }
}

/// Hours left on a suspension flagged by the query or by the fetched user.
/// `None` when neither reports one.
pub fn suspension(query_hours: Option<u32>, user: &User) -> Option<u32> {
    match (query_hours, user.suspended) {
        (None, false) => None,
        (Some(hours), _) if hours > 0 => Some(hours),
        _ => Some(user.hours_remaining.unwrap_or(0)),
    }
}

pub fn suspension_notice(hours: u32) -> String {
    let notice = "Account suspended: you have reached the maximum submission limit.";
    if hours > 0 { format!("{notice} {hours} hours remaining.") } else { notice.to_owned() }
}

/// Where to go after the user fetch. The fetched record's role is
/// authoritative; the query role only fills in when the record has none.
pub fn destination(user: &User, query_role: Option<Role>) -> &'static str {
    user.role.or(query_role).map_or(landing_path(Role::Citizen), landing_path)
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    let query = use_query_map();
    let navigate = use_navigate();
    let status = RwSignal::new(String::from("Completing authentication..."));
    let continue_to = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        let outcome = query.with_untracked(|q| parse_callback(|name| q.get(name)));
        let login_path = ctx.with_untracked(|c| c.config().login_path.clone());
        let navigate = navigate.clone();

        match outcome {
            CallbackOutcome::Failed(error) => {
                leptos::logging::warn!("authentication failed: {error}");
                status.set(format!("Authentication failed: {error}"));
                navigate(&login_path, Default::default());
            }
            CallbackOutcome::MissingToken => {
                status.set("Missing authentication token. Please try logging in again.".to_owned());
                navigate(&login_path, Default::default());
            }
            CallbackOutcome::Ready { token, role, suspended_hours } => {
                ctx.with_untracked(|c| c.auth().store().write_token(&token));
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let config = ctx.with_untracked(|c| c.config().clone());
                    match crate::net::api::fetch_current_user(&config, &token).await {
                        Ok(user) => {
                            let target = destination(&user, role);
                            let suspended = suspension(suspended_hours, &user);
                            ctx.update(|c| c.login(crate::state::session::Session { user, token }));
                            if let Some(hours) = suspended {
                                leptos::logging::warn!("signed in to a suspended account, {hours}h remaining");
                                status.set(suspension_notice(hours));
                                continue_to.set(Some(target));
                            } else {
                                navigate(target, Default::default());
                            }
                        }
                        Err(e) => {
                            leptos::logging::warn!("auth callback user fetch failed: {e}");
                            ctx.update(|c| c.logout());
                            navigate(&login_path, Default::default());
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (token, role, suspended_hours);
            }
        }
    });

    view! {
        <div class="callback-page">
            <h2>{move || status.get()}</h2>
            <Show
                when=move || continue_to.get().is_some()
                fallback=|| {
                    view! {
                        <div class="loading-screen__spinner"></div>
                        <p>"Please wait while we log you in"</p>
                    }
                }
            >
                <a class="callback-page__continue" href=move || continue_to.get().unwrap_or_default()>
                    "Continue"
                </a>
            </Show>
        </div>
    }
}
