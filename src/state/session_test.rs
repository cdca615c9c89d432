use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

const VALID_USER: &str = r#"{"id":"u1","role":"citizen"}"#;

fn store_with(user: Option<&str>, token: Option<&str>) -> SessionStore<MemoryStore> {
    let storage = MemoryStore::new();
    if let Some(user) = user {
        storage.set(USER_KEY, user);
    }
    if let Some(token) = token {
        storage.set(TOKEN_KEY, token);
    }
    SessionStore::new(storage)
}

fn assert_cleared(store: &SessionStore<MemoryStore>) {
    assert_eq!(store.storage().get(USER_KEY), None);
    assert_eq!(store.storage().get(TOKEN_KEY), None);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_well_formed_pair() {
    let session = validate(Some(VALID_USER), Some("tok123")).unwrap();
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.user.role, Some(Role::Citizen));
    assert_eq!(session.token, "tok123");
}

#[test]
fn validate_reports_absent_only_when_both_keys_missing() {
    assert_eq!(validate(None, None), Err(StorageError::Absent));
    assert_eq!(validate(Some(""), None), Err(StorageError::MissingUser));
    assert_eq!(validate(None, Some("tok123")), Err(StorageError::MissingUser));
}

#[test]
fn validate_rejects_sentinels_and_empty_values() {
    for sentinel in ["undefined", "null", "", "   "] {
        assert_eq!(validate(Some(sentinel), Some("tok123")), Err(StorageError::MissingUser));
        assert_eq!(validate(Some(VALID_USER), Some(sentinel)), Err(StorageError::MissingToken));
    }
}

#[test]
fn validate_rejects_non_json_user() {
    assert!(matches!(validate(Some("{not json"), Some("tok123")), Err(StorageError::MalformedUser(_))));
    assert!(matches!(validate(Some("42"), Some("tok123")), Err(StorageError::MalformedUser(_))));
}

#[test]
fn validate_requires_id_and_role() {
    assert_eq!(validate(Some(r#"{"role":"citizen"}"#), Some("t")), Err(StorageError::MissingUserId));
    assert_eq!(validate(Some(r#"{"id":"","role":"citizen"}"#), Some("t")), Err(StorageError::MissingUserId));
    assert_eq!(validate(Some(r#"{"id":"u1"}"#), Some("t")), Err(StorageError::InvalidRole));
    assert_eq!(validate(Some(r#"{"id":"u1","role":"root"}"#), Some("t")), Err(StorageError::InvalidRole));
    assert_eq!(validate(Some(r#"{"id":"u1","role":null}"#), Some("t")), Err(StorageError::InvalidRole));
}

// =============================================================
// read (self-healing)
// =============================================================

#[test]
fn read_returns_session_and_keeps_storage() {
    let store = store_with(Some(VALID_USER), Some("tok123"));
    let session = store.read().unwrap();
    assert_eq!(session.token, "tok123");
    assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("tok123"));
}

#[test]
fn read_clears_every_malformed_combination() {
    let cases: [(Option<&str>, Option<&str>); 9] = [
        (Some(VALID_USER), None),
        (Some(VALID_USER), Some("")),
        (Some(VALID_USER), Some("undefined")),
        (Some("null"), Some("tok123")),
        (Some("undefined"), Some("tok123")),
        (Some("not-json"), Some("tok123")),
        (Some(r#"{"role":"citizen"}"#), Some("tok123")),
        (Some(r#"{"id":"u1"}"#), Some("tok123")),
        (None, Some("tok123")),
    ];
    for (user, token) in cases {
        let store = store_with(user, token);
        assert!(store.read().is_err(), "expected invalid session for {user:?}/{token:?}");
        assert_cleared(&store);
    }
}

#[test]
fn read_of_empty_store_is_absent() {
    let store = store_with(None, None);
    assert_eq!(store.read(), Err(StorageError::Absent));
}

#[test]
fn read_leaves_language_preference_alone() {
    let store = store_with(Some("garbage"), Some("tok123"));
    store.storage().set("language", "hi");
    let _ = store.read();
    assert_eq!(store.storage().get("language").as_deref(), Some("hi"));
}

// =============================================================
// write / clear
// =============================================================

#[test]
fn write_then_read_yields_same_session() {
    let store = store_with(None, None);
    let session = validate(Some(VALID_USER), Some("tok123")).unwrap();
    store.write(&session);
    assert_eq!(store.read().unwrap(), session);
}

#[test]
fn write_token_alone_is_not_a_session() {
    let store = store_with(None, None);
    store.write_token("tok123");
    assert_eq!(store.read(), Err(StorageError::MissingUser));
    assert_cleared(&store);
}

#[test]
fn clear_is_idempotent() {
    let store = store_with(Some(VALID_USER), Some("tok123"));
    store.clear();
    store.clear();
    assert_cleared(&store);
}
