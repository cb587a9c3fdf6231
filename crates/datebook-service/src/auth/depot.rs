//! Depot helpers for reading the authenticated user in Salvo handlers.

use crate::error::{ServiceError, ServiceResult};

pub mod depot_keys {
    pub const AUTHENTICATED_USER: &str = "__authenticated_user";
    pub const AUTH_FAILURE: &str = "__auth_failure";
}

/// Represents an authenticated user or public access in the depot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepotUser {
    /// Authenticated username
    User(String),
    /// Unauthenticated/public access
    Public,
}

/// Get the authenticated username from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if no user is found in the depot or if the user is public.
pub fn get_user_from_depot(depot: &salvo::Depot) -> ServiceResult<&str> {
    let depot_user = depot
        .get::<DepotUser>(depot_keys::AUTHENTICATED_USER)
        .map_err(|_e| ServiceError::NotAuthenticated)?;

    match depot_user {
        DepotUser::User(username) => Ok(username),
        DepotUser::Public => Err(ServiceError::NotAuthenticated),
    }
}
