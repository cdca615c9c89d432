//! Inline, non-fatal error card with a reload affordance.

use leptos::prelude::*;

/// Message shown when a protected view fails to render.
pub const PROTECTED_VIEW_FAULT: &str = "Error loading dashboard. Please try refreshing the page.";

/// Message shown when anything else under the app shell fails.
pub const SHELL_FAULT: &str = "We're sorry, but something unexpected happened. Please try refreshing the page.";

/// Error card rendered in place of a failed subtree.
#[component]
pub fn FaultCard(#[prop(into)] message: String, #[prop(optional, into)] detail: Option<Signal<String>>) -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <div class="fault-card" role="alert">
            <h2 class="fault-card__title">"Something went wrong"</h2>
            <p class="fault-card__message">{message}</p>
            {detail.map(|detail| view! { <pre class="fault-card__detail">{move || detail.get()}</pre> })}
            <button class="btn fault-card__reload" on:click=on_reload>
                "Refresh Page"
            </button>
        </div>
    }
}
