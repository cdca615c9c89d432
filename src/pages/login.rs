//! Sign-in landing page.
//!
//! Lists the roles a user can sign in as and forwards anyone who already
//! holds a session to their dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::language_selector::LanguageSelector;
use crate::net::types::Role;
use crate::state::boundary::PortalContext;
use crate::util::auth::landing_path;

/// Role, label key, description key.
const ROLE_CARDS: [(Role, &str, &str); 4] = [
    (Role::Citizen, "login.citizen", "login.citizenDesc"),
    (Role::Official, "login.official", "login.officialDesc"),
    (Role::Admin, "login.admin", "login.adminDesc"),
    (Role::Judiciary, "login.judiciary", "login.judiciaryDesc"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    let navigate = use_navigate();
    let t = move |key: &'static str| ctx.with(|c| c.t(key).to_owned());

    // Signed-in users have nothing to do here.
    Effect::new(move || {
        let state = ctx.with(|c| c.auth_state());
        if state.loading {
            return;
        }
        if let Some(role) = state.user.and_then(|u| u.role) {
            navigate(landing_path(role), NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <LanguageSelector/>
                <h1>{move || t("login.welcomeToAccountability")}</h1>
                <p class="login-card__subtitle">{move || t("login.selectRole")}</p>
                <ul class="login-card__roles">
                    {ROLE_CARDS
                        .into_iter()
                        .map(|(role, label, desc)| {
                            view! {
                                <li class="login-card__role" data-role=role.as_str()>
                                    <strong>{move || t(label)}</strong>
                                    <span>{move || t(desc)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a class="login-card__back" href="/">{move || t("login.back")}</a>
            </div>
        </div>
    }
}
