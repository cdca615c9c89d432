//! Header for signed-in pages: identity, language, settings, logout.

use leptos::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::net::types::Role;
use crate::state::boundary::PortalContext;

/// Translation key for a role's display label.
pub fn role_label_key(role: Role) -> &'static str {
    match role {
        Role::Citizen => "login.citizen",
        Role::Official => "login.official",
        Role::Admin => "login.admin",
        Role::Judiciary => "login.judiciary",
    }
}

#[component]
pub fn SessionHeader() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();

    let identity = move || {
        ctx.with(|c| {
            c.auth().user().map(|user| {
                let role = user.role.map(|role| c.t(role_label_key(role)).to_owned()).unwrap_or_default();
                (user.display_name().to_owned(), role)
            })
        })
    };
    let t = move |key: &'static str| ctx.with(|c| c.t(key).to_owned());

    // The guard around the page redirects to login once the user is gone.
    let on_logout = move |_| ctx.update(|c| c.logout());

    view! {
        <header class="session-header toolbar">
            <span class="session-header__self">
                {move || identity().map(|(name, _)| name).unwrap_or_default()}
            </span>
            <span class="session-header__role">{move || identity().map(|(_, role)| role).unwrap_or_default()}</span>
            <span class="toolbar__spacer"></span>
            <LanguageSelector/>
            <a class="btn session-header__settings" href="/settings">
                {move || t("profile.accountSettings")}
            </a>
            <button class="btn session-header__logout" on:click=on_logout>
                {move || t("profile.logout")}
            </button>
        </header>
    }
}
