use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn user_with(language: Option<Language>) -> User {
    User { id: "u1".to_owned(), role: Some(Role::Citizen), language, ..User::default() }
}

// =============================================================
// Initial precedence
// =============================================================

#[test]
fn stored_preference_wins_at_startup() {
    let storage = MemoryStore::with_entries([(LANGUAGE_KEY, "hi")]);
    let locale = LocaleCoordinator::new(storage, Some(&user_with(Some(Language::En))));
    assert_eq!(locale.language(), Language::Hi);
}

#[test]
fn user_language_used_when_nothing_stored() {
    let locale = LocaleCoordinator::new(MemoryStore::new(), Some(&user_with(Some(Language::Hi))));
    assert_eq!(locale.language(), Language::Hi);
}

#[test]
fn defaults_to_english_without_user_or_storage() {
    let locale = LocaleCoordinator::new(MemoryStore::new(), None);
    assert_eq!(locale.language(), Language::En);
}

#[test]
fn fallback_applies_only_as_last_resort() {
    let locale = LocaleCoordinator::with_fallback(MemoryStore::new(), None, Language::Hi);
    assert_eq!(locale.language(), Language::Hi);

    let storage = MemoryStore::with_entries([(LANGUAGE_KEY, "en")]);
    let locale = LocaleCoordinator::with_fallback(storage, None, Language::Hi);
    assert_eq!(locale.language(), Language::En);
}

#[test]
fn unsupported_stored_value_is_ignored_and_removed() {
    let storage = MemoryStore::with_entries([(LANGUAGE_KEY, "fr")]);
    let locale = LocaleCoordinator::new(storage.clone(), None);
    assert_eq!(locale.language(), Language::En);
    assert_eq!(storage.get(LANGUAGE_KEY), None);
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn user_language_overrides_stored_preference_after_login() {
    let storage = MemoryStore::with_entries([(LANGUAGE_KEY, "hi")]);
    let mut locale = LocaleCoordinator::new(storage.clone(), None);
    assert_eq!(locale.language(), Language::Hi);

    let user = user_with(Some(Language::En));
    assert_eq!(locale.reconcile(Some(&user)), Language::En);
    assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("en"));
}

#[test]
fn user_without_language_keeps_default_when_nothing_stored() {
    let storage = MemoryStore::new();
    let mut locale = LocaleCoordinator::new(storage.clone(), None);
    locale.reconcile(Some(&user_with(None)));
    assert_eq!(locale.language(), Language::En);
    assert_eq!(storage.get(LANGUAGE_KEY), None);
}

#[test]
fn user_without_language_keeps_stored_preference() {
    let storage = MemoryStore::with_entries([(LANGUAGE_KEY, "hi")]);
    let mut locale = LocaleCoordinator::new(storage.clone(), None);
    locale.reconcile(Some(&user_with(None)));
    assert_eq!(locale.language(), Language::Hi);
    assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("hi"));
}

#[test]
fn logging_out_keeps_current_language() {
    let mut locale = LocaleCoordinator::new(MemoryStore::new(), None);
    locale.reconcile(Some(&user_with(Some(Language::Hi))));
    locale.reconcile(None);
    assert_eq!(locale.language(), Language::Hi);
}

// =============================================================
// set_language
// =============================================================

#[test]
fn set_language_updates_memory_and_storage() {
    let storage = MemoryStore::new();
    let mut locale = LocaleCoordinator::new(storage.clone(), None);
    locale.set_language(Language::Hi);
    assert_eq!(locale.language(), Language::Hi);
    assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("hi"));
}

#[test]
fn set_language_survives_reload_without_user() {
    let storage = MemoryStore::new();
    LocaleCoordinator::new(storage.clone(), None).set_language(Language::Hi);

    let reloaded = LocaleCoordinator::new(storage, None);
    assert_eq!(reloaded.language(), Language::Hi);
}

// =============================================================
// Translation
// =============================================================

#[test]
fn t_returns_unknown_key_verbatim_for_every_language() {
    let mut locale = LocaleCoordinator::new(MemoryStore::new(), None);
    for lang in [Language::En, Language::Hi] {
        locale.set_language(lang);
        assert_eq!(locale.t("unknown.key"), "unknown.key");
    }
}

#[test]
fn t_follows_current_language() {
    let mut locale = LocaleCoordinator::new(MemoryStore::new(), None);
    assert_eq!(locale.t("profile.logout"), "Logout");
    locale.set_language(Language::Hi);
    assert_eq!(locale.t("profile.logout"), "लॉगआउट");
}

#[test]
fn t_with_fills_placeholders() {
    let locale = LocaleCoordinator::new(MemoryStore::new(), None);
    assert_eq!(
        locale.t_with("landing.basedOnRatings", &[("count", "1,204")]),
        "Based on 1,204 verified citizen ratings"
    );
}

#[test]
fn interpolate_leaves_unmatched_placeholders() {
    assert_eq!(interpolate("{a} and {b}", &[("a", "1")]), "1 and {b}");
    assert_eq!(interpolate("plain", &[]), "plain");
}
