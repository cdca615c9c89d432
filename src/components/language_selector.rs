//! Interface language switcher.
//!
//! Switching applies locally at once; for a signed-in user the choice is also
//! pushed to the server record in the background.

use leptos::prelude::*;

use crate::net::types::Language;
use crate::state::boundary::PortalContext;
use crate::state::preference_sync::spawn_language_sync;

const CHOICES: [Language; 2] = [Language::En, Language::Hi];

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ctx = expect_context::<PortalContext>();
    let current = Memo::new(move |_| ctx.with(|c| c.language()));

    let choose = move |lang: Language| {
        if current.get_untracked() == lang {
            return;
        }
        ctx.update(|c| c.set_language(lang));
        spawn_language_sync(ctx, lang);
    };

    view! {
        <div class="language-selector" role="group" aria-label="Select language">
            {CHOICES
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class="language-selector__option"
                            class:language-selector__option--active=move || current.get() == lang
                            lang=lang.code()
                            on:click=move |_| choose(lang)
                        >
                            {lang.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
