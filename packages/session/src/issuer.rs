//! # Local mock token issuance
//!
//! There is no credential backend: the login and signup forms validate their
//! input here and then mint an unsigned token for the session store, in the
//! same `header.<payload>.signature` shape a real issuer would return.
//!
//! The configured admin email ([`SessionConfig::admin_email`]) logs in as the
//! administrator; every other address gets the demo user identity.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use thiserror::Error;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::models::{AccountType, Role, User};
use crate::token::{encode_unsigned, Claims};

/// Minimum [`password_strength`] accepted at signup.
pub const MIN_PASSWORD_STRENGTH: u8 = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Rejected form input. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter your full name")]
    MissingName,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password is too weak. Please include uppercase, lowercase, numbers, and special characters")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please agree to the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

/// Signup form contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: AccountType,
    pub agree_to_terms: bool,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Score from 0 to 5: length ≥ 8, uppercase, lowercase, digit, other.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.is_empty() || password.is_empty() {
        return Err(CredentialError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(CredentialError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_signup(form: &SignupForm) -> Result<(), CredentialError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(CredentialError::MissingName);
    }
    if name.chars().count() < 2 {
        return Err(CredentialError::NameTooShort);
    }
    if !is_valid_email(&form.email) {
        return Err(CredentialError::InvalidEmail);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    if password_strength(&form.password) < MIN_PASSWORD_STRENGTH {
        return Err(CredentialError::WeakPassword);
    }
    if form.password != form.confirm_password {
        return Err(CredentialError::PasswordMismatch);
    }
    if !form.agree_to_terms {
        return Err(CredentialError::TermsNotAccepted);
    }
    Ok(())
}

fn mint(user: User, now: DateTime<Utc>, config: &SessionConfig) -> Result<String, SessionError> {
    let iat = now.timestamp();
    let exp = (now + Duration::seconds(config.token_lifetime_secs)).timestamp();
    encode_unsigned(&Claims { user, iat, exp })
}

/// Mint a token for an email/password sign-in. Input must already be valid.
pub fn issue_login_token(
    email: &str,
    now: DateTime<Utc>,
    config: &SessionConfig,
) -> Result<String, SessionError> {
    let is_admin = email == config.admin_email;
    let (id, name, role, user_type) = if is_admin {
        ("admin-001", "Admin User", Role::Admin, AccountType::Admin)
    } else {
        ("user-001", "John Doe", Role::User, AccountType::General)
    };
    let user = User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        user_type,
        achievements: Vec::new(),
        classifications_count: 0,
        avatar: None,
        google_id: None,
        email_verified: true,
        created_at: Some(now),
        last_login: Some(now),
    };
    mint(user, now, config)
}

/// Mint a token for a freshly created account. Input must already be valid.
pub fn issue_signup_token(
    form: &SignupForm,
    now: DateTime<Utc>,
    config: &SessionConfig,
) -> Result<String, SessionError> {
    let role = match form.account_type {
        AccountType::Admin => Role::Admin,
        AccountType::General => Role::User,
    };
    let user = User {
        id: format!("user-{}", now.timestamp_millis()),
        name: form.name.trim().to_string(),
        email: form.email.to_lowercase(),
        role,
        user_type: form.account_type,
        achievements: Vec::new(),
        classifications_count: 0,
        avatar: None,
        google_id: None,
        email_verified: false,
        created_at: Some(now),
        last_login: Some(now),
    };
    mint(user, now, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::decode;

    fn form() -> SignupForm {
        SignupForm {
            name: "  Ann Lee ".to_string(),
            email: "Ann@Example.com".to_string(),
            password: "Recycle#2024".to_string(),
            confirm_password: "Recycle#2024".to_string(),
            account_type: AccountType::General,
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1);
        assert_eq!(password_strength("abcdefgh"), 2);
        assert_eq!(password_strength("Abcdefg1"), 4);
        assert_eq!(password_strength("Recycle#2024"), 5);
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("", "pw"), Err(CredentialError::MissingFields));
        assert_eq!(validate_login("a@b.c", ""), Err(CredentialError::MissingFields));
        assert_eq!(validate_login("not-an-email", "pw"), Err(CredentialError::InvalidEmail));
        assert_eq!(validate_login("a b@c.d", "pw"), Err(CredentialError::InvalidEmail));
        assert_eq!(validate_login("ann@example.com", "pw"), Ok(()));
    }

    #[test]
    fn test_validate_signup_order() {
        assert_eq!(validate_signup(&form()), Ok(()));

        let mut f = form();
        f.name = "   ".to_string();
        assert_eq!(validate_signup(&f), Err(CredentialError::MissingName));
        f.name = "A".to_string();
        assert_eq!(validate_signup(&f), Err(CredentialError::NameTooShort));

        let mut f = form();
        f.password = "short".to_string();
        assert_eq!(validate_signup(&f), Err(CredentialError::PasswordTooShort));
        f.password = "alllowercase".to_string();
        assert_eq!(validate_signup(&f), Err(CredentialError::WeakPassword));

        let mut f = form();
        f.confirm_password = "Recycle#2025".to_string();
        assert_eq!(validate_signup(&f), Err(CredentialError::PasswordMismatch));

        let mut f = form();
        f.agree_to_terms = false;
        assert_eq!(validate_signup(&f), Err(CredentialError::TermsNotAccepted));
    }

    #[test]
    fn test_login_token_for_admin_email() {
        let config = SessionConfig::default();
        let now = Utc::now();
        let claims = decode(&issue_login_token("admin@ecovision.com", now, &config).unwrap()).unwrap();

        assert_eq!(claims.user.id, "admin-001");
        assert_eq!(claims.user.effective_role(), Role::Admin);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_admin_email_match_is_exact() {
        let config = SessionConfig::default();
        let claims =
            decode(&issue_login_token("Admin@EcoVision.com", Utc::now(), &config).unwrap()).unwrap();

        assert_eq!(claims.user.id, "user-001");
        assert_eq!(claims.user.effective_role(), Role::User);
    }

    #[test]
    fn test_login_token_for_regular_email() {
        let config = SessionConfig::default();
        let claims =
            decode(&issue_login_token("ann@example.com", Utc::now(), &config).unwrap()).unwrap();

        assert_eq!(claims.user.id, "user-001");
        assert_eq!(claims.user.email, "ann@example.com");
        assert_eq!(claims.user.effective_role(), Role::User);
        assert!(claims.user.email_verified);
    }

    #[test]
    fn test_signup_token() {
        let config = SessionConfig::default().with_token_lifetime(3_600);
        let now = Utc::now();
        let claims = decode(&issue_signup_token(&form(), now, &config).unwrap()).unwrap();

        assert_eq!(claims.user.id, format!("user-{}", now.timestamp_millis()));
        assert_eq!(claims.user.name, "Ann Lee");
        assert_eq!(claims.user.email, "ann@example.com");
        assert!(!claims.user.email_verified);
        assert_eq!(claims.exp - claims.iat, 3_600);

        let mut admin = form();
        admin.account_type = AccountType::Admin;
        let claims = decode(&issue_signup_token(&admin, now, &config).unwrap()).unwrap();
        assert_eq!(claims.user.role, Role::Admin);
    }
}
