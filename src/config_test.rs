use super::*;

#[test]
fn default_config_uses_same_origin_and_english() {
    let cfg = PortalConfig::default();
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.home_path, "/");
    assert_eq!(cfg.default_language, Language::En);
    assert_ne!(cfg.login_path, cfg.home_path);
}

#[test]
fn from_values_without_overrides_matches_default() {
    assert_eq!(PortalConfig::from_values(None, None), PortalConfig::default());
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let cfg = PortalConfig::from_values(Some(" https://portal.example.gov/ "), None);
    assert_eq!(cfg.api_base, "https://portal.example.gov");
    assert_eq!(cfg.api_url("/api/auth/me"), "https://portal.example.gov/api/auth/me");
}

#[test]
fn same_origin_api_url_is_path_only() {
    assert_eq!(PortalConfig::default().api_url("/api/users/language"), "/api/users/language");
}

#[test]
fn default_language_override_parses() {
    assert_eq!(PortalConfig::from_values(None, Some("hi")).default_language, Language::Hi);
}

#[test]
fn unknown_default_language_falls_back_to_english() {
    assert_eq!(PortalConfig::from_values(None, Some("de")).default_language, Language::En);
    assert_eq!(PortalConfig::from_values(None, Some("  ")).default_language, Language::En);
}
