//! Public landing page; also the target for forbidden-route redirects.

use leptos::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::state::boundary::PortalContext;
use crate::util::auth::landing_path;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    let t = move |key: &'static str| ctx.with(|c| c.t(key).to_owned());
    let dashboard_path = move || ctx.with(|c| c.auth().user().and_then(|u| u.role).map(landing_path));

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__brand">"Accountability"</span>
                <span class="toolbar__spacer"></span>
                <LanguageSelector/>
                {move || match dashboard_path() {
                    Some(path) => view! { <a class="btn" href=path>{t("dashboard.dashboard")}</a> }.into_any(),
                    None => view! { <a class="btn" href="/login">{t("landing.login")}</a> }.into_any(),
                }}
            </header>
            <section class="home-page__hero">
                <p class="home-page__tag">{move || t("landing.liveGovernance")}</p>
                <h1>{move || t("landing.publicDashboard")}</h1>
            </section>
        </div>
    }
}
