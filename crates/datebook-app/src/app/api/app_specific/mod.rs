//! Account and service status endpoints under /api/app.

use salvo::Router;

use datebook_core::constants::APP_ROUTE_COMPONENT;

mod auth;
mod healthcheck;
mod whoami;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APP_ROUTE_COMPONENT)
        .push(auth::routes())
        .push(healthcheck::routes())
        .push(whoami::routes())
}
