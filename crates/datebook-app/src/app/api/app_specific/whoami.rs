use salvo::prelude::Json;
use salvo::{Depot, Response, Router, handler};
use serde::Serialize;

use datebook_service::auth::get_user_from_depot;

use crate::error::render_error;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub username: String,
}

/// ## Summary
/// Returns the authenticated username as JSON, or 401 for public requests.
/// The user is read from the depot set by the `AuthMiddleware`.
#[handler]
async fn whoami(depot: &mut Depot, res: &mut Response) {
    match get_user_from_depot(depot) {
        Ok(username) => {
            let body = WhoamiResponse {
                username: username.to_string(),
            };
            res.render(Json(body));
        }
        Err(e) => render_error(res, depot, e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}
