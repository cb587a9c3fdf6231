use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{ServiceError, ServiceResult};

/// Credential hashing and verification capability.
///
/// Handlers receive an implementation through the depot, so the hashing
/// scheme can change without touching account logic.
pub trait CredentialVerifier: Send + Sync {
    /// ## Errors
    /// Returns an error if hashing fails.
    fn hash(&self, password: &str) -> ServiceResult<String>;

    /// Returns `Ok(())` if `password` matches `password_hash`.
    ///
    /// ## Errors
    /// Returns `InvalidCredentials` on mismatch, `InvalidConfiguration` if the
    /// stored hash cannot be parsed.
    fn verify(&self, password: &str, password_hash: &str) -> ServiceResult<()>;
}

/// Argon2id with a random salt per hash; verification is constant-time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

impl CredentialVerifier for Argon2Verifier {
    fn hash(&self, password: &str) -> ServiceResult<String> {
        hash_password(password)
    }

    fn verify(&self, password: &str, password_hash: &str) -> ServiceResult<()> {
        verify_password(password, password_hash)
    }
}

/// ## Summary
/// Hashes a password using Argon2id with a random salt.
///
/// ## Errors
/// Returns an error if password hashing fails.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to hash password: {e}")))?;

    Ok(password_hash.to_string())
}

/// ## Summary
/// Verifies a password against a stored Argon2 hash.
///
/// ## Errors
/// Returns `InvalidCredentials` if the password does not match, or
/// `InvalidConfiguration` if the hash format is invalid.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<()> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid password hash: {e}")))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|err| {
            tracing::trace!("Password verification failed: {}", err);
            ServiceError::InvalidCredentials
        })
}
