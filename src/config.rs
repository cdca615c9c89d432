//! Portal configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled:
//!
//! - `PORTAL_API_BASE`: prefix for REST calls (default: same origin)
//! - `PORTAL_DEFAULT_LANGUAGE`: `en` (default) or `hi`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Language;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Origin prefix for REST calls, without trailing `/`. Empty means same origin.
    pub api_base: String,
    pub login_path: String,
    /// Neutral location for authenticated-but-forbidden redirects.
    pub home_path: String,
    /// Language used when neither storage nor the user record has one.
    pub default_language: Language,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            default_language: Language::DEFAULT,
        }
    }
}

impl PortalConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_API_BASE"), option_env!("PORTAL_DEFAULT_LANGUAGE"))
    }

    fn from_values(api_base: Option<&str>, default_language: Option<&str>) -> Self {
        Self {
            api_base: parse_api_base(api_base),
            default_language: parse_default_language(default_language),
            ..Self::default()
        }
    }

    /// Absolute or origin-relative URL for an `/api/...` path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

fn parse_default_language(raw: Option<&str>) -> Language {
    match raw.map(str::trim) {
        None | Some("") => Language::DEFAULT,
        Some(code) => Language::parse(code).unwrap_or_else(|| {
            leptos::logging::warn!("unknown PORTAL_DEFAULT_LANGUAGE {code:?}, using en");
            Language::DEFAULT
        }),
    }
}
