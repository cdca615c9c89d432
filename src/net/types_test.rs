use super::*;

// =============================================================
// Role / Language tags
// =============================================================

#[test]
fn role_parse_accepts_known_tags_only() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Citizen"), None);
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn language_parse_and_code_agree() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("hi"), Some(Language::Hi));
    assert_eq!(Language::parse("fr"), None);
    assert_eq!(Language::Hi.code(), "hi");
    assert_eq!(Language::default(), Language::DEFAULT);
}

// =============================================================
// User deserialization
// =============================================================

#[test]
fn user_deserializes_minimal_record() {
    let user: User = serde_json::from_str(r#"{"id":"u1","role":"citizen"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Some(Role::Citizen));
    assert_eq!(user.language, None);
}

#[test]
fn user_role_is_none_when_unknown_or_not_a_string() {
    let unknown: User = serde_json::from_str(r#"{"id":"u1","role":"wizard"}"#).unwrap();
    assert_eq!(unknown.role, None);

    let numeric: User = serde_json::from_str(r#"{"id":"u1","role":7}"#).unwrap();
    assert_eq!(numeric.role, None);

    let missing: User = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
    assert_eq!(missing.role, None);
}

#[test]
fn user_numeric_id_is_stringified() {
    let user: User = serde_json::from_str(r#"{"id":42,"role":"admin"}"#).unwrap();
    assert_eq!(user.id, "42");
}

#[test]
fn user_ignores_unknown_fields_and_reads_profile() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","role":"official","language":"hi","fullName":"Asha Rao","department":"Revenue","extra":true}"#,
    )
    .unwrap();
    assert_eq!(user.language, Some(Language::Hi));
    assert_eq!(user.full_name.as_deref(), Some("Asha Rao"));
    assert_eq!(user.department.as_deref(), Some("Revenue"));
}

#[test]
fn user_reads_suspension_leniently() {
    let user: User = serde_json::from_str(r#"{"id":"u1","suspended":true,"hoursRemaining":12}"#).unwrap();
    assert!(user.suspended);
    assert_eq!(user.hours_remaining, Some(12));

    let user: User = serde_json::from_str(r#"{"id":"u1","suspended":"true","hoursRemaining":"5"}"#).unwrap();
    assert!(user.suspended);
    assert_eq!(user.hours_remaining, Some(5));

    let user: User = serde_json::from_str(r#"{"id":"u1","suspended":null,"hoursRemaining":-3}"#).unwrap();
    assert!(!user.suspended);
    assert_eq!(user.hours_remaining, None);
}

#[test]
fn user_serializes_without_empty_optionals() {
    let user = User { id: "u1".to_owned(), role: Some(Role::Citizen), ..User::default() };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "u1", "role": "citizen" }));
}

#[test]
fn display_name_prefers_full_name_then_username_then_id() {
    let mut user = User { id: "u1".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "u1");
    user.username = Some("asha".to_owned());
    assert_eq!(user.display_name(), "asha");
    user.full_name = Some("Asha Rao".to_owned());
    assert_eq!(user.display_name(), "Asha Rao");
}
