use datebook_db::{db::Store, model::user::User};

use super::password::CredentialVerifier;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Registers a new account, storing only the password hash.
///
/// ## Side Effects
/// Inserts a user into the store.
///
/// ## Errors
/// Returns `ValidationError` for an empty username or password or a username
/// containing `:` or control characters, `DuplicateUser` if the username is
/// taken.
#[tracing::instrument(skip(store, verifier, password))]
pub async fn register(
    store: &Store,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> ServiceResult<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ServiceError::ValidationError(
            "Username and password are required".to_string(),
        ));
    }

    // Basic credentials split at the first ':'
    if username.contains(':') || username.chars().any(char::is_control) {
        return Err(ServiceError::ValidationError(
            "Username must not contain ':' or control characters".to_string(),
        ));
    }

    if store.find_user(username).await.is_some() {
        return Err(ServiceError::DuplicateUser(username.to_string()));
    }

    let password_hash = verifier.hash(password)?;
    store
        .insert_user(User {
            username: username.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!(username, "User registered successfully");
    Ok(())
}

/// ## Summary
/// Checks a username/password pair against the stored hash.
///
/// ## Errors
/// Returns `InvalidCredentials` for an unknown user or a wrong password.
#[tracing::instrument(skip(store, verifier, password))]
pub async fn login(
    store: &Store,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> ServiceResult<()> {
    let user = store
        .find_user(username)
        .await
        .ok_or(ServiceError::InvalidCredentials)?;

    verifier.verify(password, &user.password_hash)
}
