//! Root application component: session boundary, routing, crash isolation.
//!
//! ARCHITECTURE
//! ============
//! Mount order is fixed: the storage-backed `AppContext` is built and provided
//! before the router and any page exist, then a single effect resolves the
//! persisted session on the client. Server-rendered HTML therefore always
//! shows the loading state and the client leaves it exactly once.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::fault_card::{FaultCard, SHELL_FAULT};
use crate::components::protected_route::ProtectedRoute;
use crate::config::PortalConfig;
use crate::net::types::Role;
use crate::pages::{auth_callback::AuthCallbackPage, dashboard, home::HomePage, login::LoginPage, settings};
use crate::state::boundary::{AppContext, PortalContext};
use crate::util::storage::BrowserStore;

/// HTML shell for servers that render the app with the `ssr` feature.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx: PortalContext = RwSignal::new(AppContext::new(BrowserStore, PortalConfig::from_build_env()));
    provide_context(ctx);

    // Effects only run in the browser; this is the one Loading -> resolved step.
    Effect::new(move || {
        let state = ctx.try_update(AppContext::start);
        if let Some(state) = state {
            leptos::logging::log!("session resolved: signed_in={}", state.user.is_some());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/civic-portal.css"/>
        <Title text="Accountability"/>

        <ErrorBoundary fallback=|errors| {
            let detail = Signal::derive(move || {
                errors.with(|errs| errs.iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>().join("\n"))
            });
            view! { <FaultCard message=SHELL_FAULT detail=detail/> }
        }>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <ProtectedRoute roles=&Role::ALL page=settings::page/> }
                    />
                    <Route
                        path=(StaticSegment("citizen"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute roles=&[Role::Citizen] page=dashboard::citizen/> }
                    />
                    <Route
                        path=(StaticSegment("official"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute roles=&[Role::Official] page=dashboard::official/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute roles=&[Role::Admin] page=dashboard::admin/> }
                    />
                    <Route
                        path=(StaticSegment("judiciary"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute roles=&[Role::Judiciary] page=dashboard::judiciary/> }
                    />
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}
