//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server owns user records; the client only inspects `id`, `role`, and
//! `language`. Those three are parsed leniently so that a stale or hand-edited
//! snapshot degrades into "invalid session" instead of a deserialize panic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Capability tag governing which protected views a session may access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Official,
    Admin,
    Judiciary,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Citizen, Role::Official, Role::Admin, Role::Judiciary];

    /// Parse an exact lowercase role tag.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "citizen" => Some(Self::Citizen),
            "official" => Some(Self::Official),
            "admin" => Some(Self::Admin),
            "judiciary" => Some(Self::Judiciary),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Official => "official",
            Self::Admin => "admin",
            Self::Judiciary => "judiciary",
        }
    }
}

/// Display language for the interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    /// Parse an exact language code (`"en"` or `"hi"`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Name of the language in its own script, for selectors.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
        }
    }
}

/// Cached snapshot of the server-issued user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier. Numeric ids are accepted and stringified.
    #[serde(default, deserialize_with = "deserialize_id_lenient")]
    pub id: String,
    /// Capability tag; `None` when missing or unrecognized.
    #[serde(default, deserialize_with = "deserialize_role_lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Stored interface language preference, if the user has one.
    #[serde(default, deserialize_with = "deserialize_language_lenient", skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Submission lock reported by `/api/auth/me`.
    #[serde(default, deserialize_with = "deserialize_flag_lenient", skip_serializing_if = "std::ops::Not::not")]
    pub suspended: bool,
    #[serde(
        default,
        rename = "hoursRemaining",
        deserialize_with = "deserialize_hours_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours_remaining: Option<u32>,
}

impl User {
    /// Name shown in headers: full name, then username, then id.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

fn deserialize_id_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_role_lenient<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Role::parse))
}

fn deserialize_language_lenient<'de, D>(deserializer: D) -> Result<Option<Language>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Language::parse))
}

fn deserialize_flag_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn deserialize_hours_lenient<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|h| u32::try_from(h).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
