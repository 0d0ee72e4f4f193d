//! # Identity models carried inside session tokens
//!
//! [`User`] mirrors the `user` object embedded in a token payload (camelCase on
//! the wire). Two fields can mark an administrator: `role` and `userType`.
//! They are collapsed into a single [`Role`] by [`User::effective_role`], which
//! the session store evaluates once per decoded identity.
//!
//! Decoding is lenient: tokens minted by other issuers may omit `userType` or
//! the timestamps, carry unknown role names, or use date-only timestamps. None
//! of that rejects the identity; anything not spelled `admin` is a plain user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Access level of an identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// Account category chosen at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Admin,
    #[default]
    #[serde(other)]
    General,
}

/// Authenticated user as embedded in a token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_type: AccountType,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub classifications_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_login: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339, a bare `YYYY-MM-DD` date, or epoch milliseconds. Anything
/// else decodes as absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
        Other(serde::de::IgnoredAny),
    }

    let parsed = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|t| t.and_utc())
            }),
        Some(Raw::Millis(millis)) => DateTime::from_timestamp_millis(millis),
        Some(Raw::Other(_)) | None => None,
    };
    Ok(parsed)
}

impl User {
    /// Admin if either `role` or `userType` says so.
    pub fn effective_role(&self) -> Role {
        if self.role == Role::Admin || self.user_type == AccountType::Admin {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Short name for greetings, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Partial profile sent to the profile endpoint. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }
}
