//! Active display language and translation lookup.
//!
//! DESIGN
//! ======
//! Two places hold a preference: the `language` storage key and the logged-in
//! user's record. At startup the stored key wins. Once a user is known, a
//! language on the user record wins and is written through to storage; a user
//! without one keeps whatever storage holds, and nothing is pushed back to the
//! server in that case.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::net::types::{Language, User};
use crate::state::translations;
use crate::util::storage::KeyValueStore;

pub const LANGUAGE_KEY: &str = "language";

/// Translate `key` for `lang`, or return `key` unchanged when it is unknown.
pub fn translate(lang: Language, key: &str) -> &str {
    translations::lookup(lang, key).unwrap_or(key)
}

/// Replace `{name}` placeholders in `template`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(template.to_owned(), |text, (name, value)| text.replace(&format!("{{{name}}}"), value))
}

/// Resolves, persists, and serves the interface language.
#[derive(Clone, Debug)]
pub struct LocaleCoordinator<S> {
    storage: S,
    language: Language,
}

impl<S: KeyValueStore> LocaleCoordinator<S> {
    /// Build with the static default as the last fallback.
    ///
    /// `user` may be `None` while auth is still loading.
    pub fn new(storage: S, user: Option<&User>) -> Self {
        Self::with_fallback(storage, user, Language::DEFAULT)
    }

    /// Precedence: stored preference, then `user.language`, then `fallback`.
    pub fn with_fallback(storage: S, user: Option<&User>, fallback: Language) -> Self {
        let language = stored_language(&storage)
            .or_else(|| user.and_then(|u| u.language))
            .unwrap_or(fallback);
        Self { storage, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Re-derive the language after the authenticated user changed.
    pub fn reconcile(&mut self, user: Option<&User>) -> Language {
        let Some(user) = user else {
            return self.language;
        };
        if let Some(lang) = user.language {
            self.language = lang;
            self.storage.set(LANGUAGE_KEY, lang.code());
        } else if let Some(stored) = stored_language(&self.storage) {
            self.language = stored;
        }
        self.language
    }

    /// User-initiated change: memory and storage, synchronously.
    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
        self.storage.set(LANGUAGE_KEY, lang.code());
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    /// Translate `key` and fill its `{name}` placeholders.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }
}

/// Stored preference, if it is a supported language. Unsupported values are
/// dropped from storage.
fn stored_language<S: KeyValueStore>(storage: &S) -> Option<Language> {
    let raw = storage.get(LANGUAGE_KEY)?;
    let parsed = Language::parse(raw.trim());
    if parsed.is_none() {
        leptos::logging::warn!("ignoring unsupported stored language {raw:?}");
        storage.remove(LANGUAGE_KEY);
    }
    parsed
}
