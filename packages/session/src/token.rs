//! # Bearer token codec
//!
//! Tokens have the shape `header.payload.signature`. Only the payload is
//! interpreted: it is base64 of a JSON [`Claims`] object. Both the standard and
//! URL-safe alphabets are accepted, with or without padding, because locally
//! minted tokens use the former and real JWTs the latter.
//!
//! The signature segment is **not verified**. A forged payload decodes like a
//! genuine one; only structural corruption is detected. Any deployment with a
//! real trust boundary has to verify signatures before calling [`decode`].

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::models::User;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user: User,
    /// Issued-at, epoch seconds.
    pub iat: i64,
    /// Expiry, epoch seconds.
    pub exp: i64,
}

impl Claims {
    /// Expiry in epoch milliseconds.
    pub fn expires_at_millis(&self) -> i64 {
        self.exp.saturating_mul(1000)
    }

    /// A token is live while its expiry lies strictly in the future.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.expires_at_millis() <= now_millis
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_millis())
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Decode the payload segment of `token` without checking expiry.
pub fn decode(token: &str) -> Result<Claims, SessionError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(SessionError::InvalidToken(
            "expected three dot-separated segments".to_string(),
        ));
    };

    if payload.is_empty() {
        return Err(SessionError::InvalidToken("empty payload segment".to_string()));
    }

    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = LENIENT
        .decode(normalized.as_bytes())
        .map_err(|e| SessionError::InvalidToken(format!("payload is not base64: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::InvalidToken(format!("payload is not a valid claim set: {e}")))
}

/// Encode `claims` the way the local mock issuer does: placeholder header and
/// signature around a standard base64 payload.
pub fn encode_unsigned(claims: &Claims) -> Result<String, SessionError> {
    let json = serde_json::to_vec(claims)
        .map_err(|e| SessionError::InvalidToken(format!("claims not serializable: {e}")))?;
    Ok(format!("header.{}.signature", STANDARD.encode(json)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{AccountType, Role};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Claims whose timestamps derive from `iat` only, so equal arguments give
    /// equal claims.
    pub(crate) fn claims(id: &str, name: &str, role: Role, iat: i64, exp: i64) -> Claims {
        let issued = chrono::DateTime::from_timestamp(iat, 0);
        Claims {
            user: User {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                role,
                user_type: AccountType::General,
                achievements: vec!["First Sort".to_string()],
                classifications_count: 3,
                avatar: None,
                google_id: None,
                email_verified: true,
                created_at: issued,
                last_login: issued,
            },
            iat,
            exp,
        }
    }

    #[test]
    fn test_decode_mock_token() {
        let now = Utc::now().timestamp();
        let original = claims("u1", "Ann", Role::User, now, now + 86_400);
        let token = encode_unsigned(&original).unwrap();
        assert!(token.starts_with("header."));
        assert!(token.ends_with(".signature"));

        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, original);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn test_decode_url_safe_unpadded_payload() {
        let now = Utc::now().timestamp();
        let original = claims("u2", "Bob", Role::Admin, now, now + 60);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&original).unwrap());
        let token = format!("eyJhbGciOiJIUzI1NiJ9.{payload}.c2ln");

        assert_eq!(decode(&token).unwrap().user.role, Role::Admin);
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert!(matches!(decode("onlyone"), Err(SessionError::InvalidToken(_))));
        assert!(matches!(decode("a.b"), Err(SessionError::InvalidToken(_))));
        assert!(matches!(decode("a.b.c.d"), Err(SessionError::InvalidToken(_))));
        assert!(matches!(decode("a..c"), Err(SessionError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_garbage_payload() {
        assert!(matches!(
            decode("header.%%%not-base64%%%.signature"),
            Err(SessionError::InvalidToken(_))
        ));

        let not_json = STANDARD.encode("hello world");
        assert!(matches!(
            decode(&format!("header.{not_json}.signature")),
            Err(SessionError::InvalidToken(_))
        ));

        let wrong_shape = STANDARD.encode(r#"{"user":{"name":"x"},"iat":1,"exp":2}"#);
        assert!(matches!(
            decode(&format!("header.{wrong_shape}.signature")),
            Err(SessionError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_claims_helper_is_deterministic() {
        let a = claims("u1", "Ann", Role::User, 1_700_000_000, 1_700_086_400);
        let b = claims("u1", "Ann", Role::User, 1_700_000_000, 1_700_086_400);
        assert_eq!(a, b);
        assert_eq!(a.user.created_at.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_expiry_boundary() {
        let c = claims("u1", "Ann", Role::User, 1_000, 2_000);
        assert!(!c.is_expired_at(1_999_999));
        assert!(c.is_expired_at(2_000_000));
        assert!(c.is_expired_at(2_000_001));
    }
}
