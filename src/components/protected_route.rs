//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Router entries for dashboards and settings render through `ProtectedRoute`,
//! which applies `util::auth::decide` and isolates render failures of the page
//! behind an `ErrorBoundary`, so one broken page never blanks the shell.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::fault_card::{FaultCard, PROTECTED_VIEW_FAULT};
use crate::net::types::Role;
use crate::state::boundary::PortalContext;
use crate::util::auth::GuardDecision;

/// Render-time failure of a protected page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("no signed-in user")]
    MissingUser,

    #[error("{0}")]
    Render(String),
}

/// A protected page: builds its view or reports why it cannot.
pub type ProtectedPage = fn() -> Result<AnyView, ViewError>;

/// Spinner shown while the persisted session is still loading.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    view! {
        <div class="loading-screen" aria-busy="true">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">{move || ctx.with(|c| c.t("common.loading").to_owned())}</p>
        </div>
    }
}

/// Render `page` only for signed-in users whose role is in `roles`.
#[component]
pub fn ProtectedRoute(roles: &'static [Role], page: ProtectedPage) -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    let decision = Memo::new(move |_| ctx.with(|c| c.guard(roles)));

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::Render => view! {
            <ErrorBoundary fallback=|errors| {
                let detail = Signal::derive(move || {
                    errors.with(|errs| errs.iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>().join("\n"))
                });
                view! { <FaultCard message=PROTECTED_VIEW_FAULT detail=detail/> }
            }>
                {page()}
            </ErrorBoundary>
        }
        .into_any(),
        redirect => {
            let path = ctx.with_untracked(|c| redirect.redirect_target(c.config()).map(str::to_owned));
            view! { <Redirect path=path.unwrap_or_default()/> }.into_any()
        }
    }
}
