use salvo::Depot;
use tracing::error;

use crate::{
    config::get_config_from_depot, credentials_handler::get_verifier_from_depot,
    store_handler::get_store_from_depot,
};
use datebook_service::auth::{DepotUser, authenticate, depot::depot_keys};
use datebook_service::error::ServiceError;

/// ## Summary
/// Resolves the acting user for every request under `/api` and stores it in
/// the depot.
///
/// Missing or rejected credentials resolve to `DepotUser::Public`; handlers
/// that need a user answer 401 themselves.
///
/// ## Side Effects
/// Inserts the resolved user into the depot under
/// `depot_keys::AUTHENTICATED_USER`.
///
/// ## Errors
/// Returns HTTP 500 if the config, store or verifier is missing from the depot,
/// or if the configured auth method cannot be applied.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match (
            get_config_from_depot(depot),
            get_store_from_depot(depot),
            get_verifier_from_depot(depot),
        ) {
            (Ok(config), Ok(_), Ok(_)) => config,
            (config, store, verifier) => {
                error!(
                    config = config.is_ok(),
                    store = store.is_ok(),
                    verifier = verifier.is_ok(),
                    "Request state missing from depot"
                );
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
                return;
            }
        };

        match authenticate(req, depot, &config).await {
            Ok(user) => {
                if let DepotUser::User(username) = &user {
                    tracing::debug!(user = %username, "User authenticated successfully");
                }
                depot.insert(depot_keys::AUTHENTICATED_USER, user);
            }
            Err(
                service_err @ (ServiceError::NotAuthenticated | ServiceError::InvalidCredentials),
            ) => {
                tracing::debug!(error = %service_err, "Request not authenticated, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            }
            Err(service_err) => {
                error!(error = ?service_err, "Authentication failed with error");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler for authentication.
/// Hoop it onto a router to resolve the acting user for all its routes.
pub struct AuthMiddleware;
