use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::AuthResponse,
        jwt::JwtKeys,
        password::{hash_password, verify_decoy, verify_password},
        repo::UserRepo,
    },
    error::{AppError, StoreError},
};

const EMAIL_TAKEN: &str = "Email taken.";
const INVALID_CREDENTIALS: &str = "Invalid credentials.";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trim, lowercase and validate an email address.
pub(crate) fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::Validation("email must be an email".into()));
    }
    Ok(email)
}

/// Maps a unique-constraint violation on `users.email` to a conflict.
pub(crate) fn email_conflict(e: StoreError) -> AppError {
    match e {
        StoreError::UniqueViolation => AppError::Conflict(EMAIL_TAKEN.into()),
        other => other.into(),
    }
}

pub async fn signup(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AppError> {
    let email = normalize_email(email)?;
    if password.is_empty() {
        return Err(AppError::Validation("password should not be empty".into()));
    }

    let hash = hash_password(password).await?;
    let user = users.create(&email, &hash).await.map_err(|e| {
        if matches!(e, StoreError::UniqueViolation) {
            warn!(email = %email, "email already registered");
        }
        email_conflict(e)
    })?;

    let access_token = keys.sign(user.id, &user.email)?;
    info!(user_id = user.id, email = %user.email, "user signed up");
    Ok(AuthResponse { access_token })
}

pub async fn signin(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AppError> {
    let email = normalize_email(email)?;

    let Some(user) = users.find_by_email(&email).await? else {
        verify_decoy(password).await;
        warn!(email = %email, "signin unknown email");
        return Err(AppError::Forbidden(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(password, &user.password_hash).await? {
        warn!(email = %email, user_id = user.id, "signin wrong password");
        return Err(AppError::Forbidden(INVALID_CREDENTIALS.into()));
    }

    let access_token = keys.sign(user.id, &user.email)?;
    info!(user_id = user.id, email = %user.email, "user signed in");
    Ok(AuthResponse { access_token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_keys, MemoryStore};
    use axum::http::StatusCode;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert_eq!(normalize_email("  A@Example.COM ").unwrap(), "a@example.com");
    }

    #[tokio::test]
    async fn signup_issues_token_and_creates_one_user() {
        let store = MemoryStore::default();
        let keys = test_keys();

        let res = signup(&store, &keys, "a@example.com", "12345678").await.unwrap();
        assert!(!res.access_token.is_empty());
        assert_eq!(store.user_count(), 1);

        let claims = keys.verify(&res.access_token).unwrap();
        assert_eq!(claims.email, "a@example.com");
    }

    #[tokio::test]
    async fn signup_stores_hash_not_plaintext() {
        let store = MemoryStore::default();
        signup(&store, &test_keys(), "a@example.com", "12345678").await.unwrap();
        let user = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "12345678");
        assert!(verify_password("12345678", &user.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts_without_second_row() {
        let store = MemoryStore::default();
        let keys = test_keys();
        signup(&store, &keys, "a@example.com", "12345678").await.unwrap();

        let err = signup(&store, &keys, "A@example.com", "other-pass").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn signup_validates_input() {
        let store = MemoryStore::default();
        let keys = test_keys();
        let err = signup(&store, &keys, "not-an-email", "12345678").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = signup(&store, &keys, "a@example.com", "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn signin_with_correct_credentials() {
        let store = MemoryStore::default();
        let keys = test_keys();
        signup(&store, &keys, "a@example.com", "12345678").await.unwrap();

        let res = signin(&store, &keys, "a@example.com", "12345678").await.unwrap();
        let claims = keys.verify(&res.access_token).unwrap();
        assert_eq!(claims.email, "a@example.com");
    }

    #[tokio::test]
    async fn signin_failures_are_indistinguishable() {
        let store = MemoryStore::default();
        let keys = test_keys();
        signup(&store, &keys, "a@example.com", "12345678").await.unwrap();

        let wrong_password = signin(&store, &keys, "a@example.com", "nope").await.unwrap_err();
        let unknown_email = signin(&store, &keys, "b@example.com", "12345678").await.unwrap_err();

        assert_eq!(wrong_password.status(), StatusCode::FORBIDDEN);
        assert_eq!(unknown_email.status(), StatusCode::FORBIDDEN);
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
