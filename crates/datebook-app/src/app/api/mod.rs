mod app_specific;
mod calendar;
mod events;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

// Re-export route constants from core
pub use datebook_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_PREFIX, CALENDAR_ROUTE_PREFIX,
    EVENTS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router: account endpoints, the month view and
/// event management, all behind `AuthMiddleware`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
        .push(calendar::routes())
        .push(events::routes())
}
