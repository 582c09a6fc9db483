//! Argon2id credential hashing.
//!
//! Hashing costs ~19 MiB and two passes per call, so the async entry points
//! run it on tokio's blocking pool instead of a request worker.

use anyhow::Context;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::error;

lazy_static! {
    /// Verified against when signin finds no account, so that path costs one
    /// full verification like a wrong password does.
    static ref DECOY_HASH: Option<String> = hash_blocking("decoy credential").ok();
}

fn argon2id() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

fn hash_blocking(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2id()
        .hash_password(plain.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| {
            error!(error = %e, "argon2 hashing failed");
            anyhow::anyhow!("hash password: {e}")
        })
}

fn verify_blocking(plain: &str, phc: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(phc).map_err(|e| anyhow::anyhow!("stored hash is not a PHC string: {e}"))?;
    Ok(argon2id().verify_password(plain.as_bytes(), &parsed).is_ok())
}

/// Salted Argon2id PHC string for `plain`; parameters and salt travel inside it.
pub async fn hash_password(plain: &str) -> anyhow::Result<String> {
    let plain = plain.to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&plain))
        .await
        .context("password hashing task")?
}

/// `Ok(false)` on mismatch; `Err` only when `phc` cannot be parsed.
pub async fn verify_password(plain: &str, phc: &str) -> anyhow::Result<bool> {
    let (plain, phc) = (plain.to_owned(), phc.to_owned());
    tokio::task::spawn_blocking(move || verify_blocking(&plain, &phc))
        .await
        .context("password verification task")?
}

/// Spends one verification on the decoy hash. Always `false`.
pub async fn verify_decoy(plain: &str) -> bool {
    let Some(decoy) = DECOY_HASH.as_deref() else {
        return false;
    };
    let _ = verify_password(plain, decoy).await;
    false
}
