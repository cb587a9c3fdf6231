use std::sync::Arc;

use salvo::Depot;
use salvo::basic_auth::{BasicAuthValidator, parse_credentials};
use salvo::http::header::AUTHORIZATION;

use datebook_core::config::{AuthMethod, Settings};
use datebook_db::db::Store;

use super::{account::login, depot::DepotUser, depot::depot_keys, password::CredentialVerifier};
use crate::error::{ServiceError, ServiceResult};

/// Checks Basic credentials against the store and verifier injected into the
/// depot.
///
/// A failure other than bad credentials is left in the depot under
/// `depot_keys::AUTH_FAILURE` so the caller can report it.
pub struct StoreValidator;

impl BasicAuthValidator for StoreValidator {
    async fn validate(&self, username: &str, password: &str, depot: &mut Depot) -> bool {
        let store = depot.obtain::<Store>().cloned();
        let verifier = depot.obtain::<Arc<dyn CredentialVerifier>>().cloned();
        let (Ok(store), Ok(verifier)) = (store, verifier) else {
            depot.insert(
                depot_keys::AUTH_FAILURE,
                ServiceError::InvalidConfiguration(
                    "Store or credential verifier missing from depot".to_string(),
                ),
            );
            return false;
        };

        match login(&store, verifier.as_ref(), username, password).await {
            Ok(()) => true,
            Err(ServiceError::InvalidCredentials) => {
                tracing::debug!(username, "Rejected Basic credentials");
                false
            }
            Err(err) => {
                depot.insert(depot_keys::AUTH_FAILURE, err);
                false
            }
        }
    }
}

#[tracing::instrument(skip(req, depot))]
async fn authenticate_basic(req: &salvo::Request, depot: &mut Depot) -> ServiceResult<DepotUser> {
    if !req.headers().contains_key(AUTHORIZATION) {
        tracing::trace!("No Authorization header, request is public");
        return Ok(DepotUser::Public);
    }

    let (username, password) = parse_credentials(req, &[AUTHORIZATION]).map_err(|e| {
        tracing::debug!(error = %e, "Malformed Basic credentials");
        ServiceError::NotAuthenticated
    })?;

    if StoreValidator.validate(&username, &password, depot).await {
        return Ok(DepotUser::User(username));
    }

    Err(depot
        .remove::<ServiceError>(depot_keys::AUTH_FAILURE)
        .unwrap_or(ServiceError::InvalidCredentials))
}

fn authenticate_single_user(config: &Settings) -> ServiceResult<DepotUser> {
    let single_user = config
        .auth
        .single_user
        .as_ref()
        .ok_or(ServiceError::InvalidConfiguration(
            "Single user config is missing".to_string(),
        ))?;

    Ok(DepotUser::User(single_user.username.clone()))
}

/// ## Summary
/// Authenticate a request based on the configured authentication method.
///
/// A request without credentials resolves to `DepotUser::Public`. Basic
/// credentials are checked by [`StoreValidator`], which needs the `Store` and
/// the `Arc<dyn CredentialVerifier>` injected into `depot`.
///
/// ## Errors
/// Returns `NotAuthenticated` for malformed credentials, `InvalidCredentials`
/// for a failed password check and `InvalidConfiguration` if the auth method
/// is missing its settings or a stored hash is unreadable.
#[tracing::instrument(skip(req, depot, config))]
pub async fn authenticate(
    req: &salvo::Request,
    depot: &mut Depot,
    config: &Settings,
) -> ServiceResult<DepotUser> {
    tracing::trace!(auth_method = ?config.auth.method, "Authenticating request");

    match config.auth.method {
        AuthMethod::SingleUser => authenticate_single_user(config),
        AuthMethod::BasicAuth => authenticate_basic(req, depot).await,
    }
}
