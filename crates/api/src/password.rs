//! Argon2id password hashing.
//!
//! Hashes use the Argon2id variant with a random salt from [`OsRng`] and are
//! stored as PHC strings, so parameters and salt travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::error::AppError;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Hash an optional request password, keeping `None` as `None`.
pub fn hash_optional(password: Option<&str>) -> Result<Option<String>, AppError> {
    password
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}
