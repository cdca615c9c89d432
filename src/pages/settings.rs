//! Account settings: interface language preference.

use leptos::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::components::protected_route::ViewError;
use crate::components::session_header::SessionHeader;
use crate::state::boundary::PortalContext;

pub fn page() -> Result<AnyView, ViewError> {
    let ctx = use_context::<PortalContext>().ok_or_else(|| ViewError::Render("portal context missing".to_owned()))?;
    let t = move |key: &'static str| ctx.with(|c| c.t(key).to_owned());

    Ok(view! {
        <div class="settings-page">
            <SessionHeader/>
            <h1>{move || t("settings.title")}</h1>
            <p>{move || t("settings.subtitle")}</p>
            <section class="settings-page__section">
                <h2>{move || t("settings.language")}</h2>
                <p>{move || t("settings.languageDesc")}</p>
                <LanguageSelector/>
            </section>
        </div>
    }
    .into_any())
}
