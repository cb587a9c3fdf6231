use chrono::Local;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};

use datebook_core::constants::CALENDAR_ROUTE_COMPONENT;
use datebook_service::auth::get_user_from_depot;
use datebook_service::calendar::{MonthView, month_view};

use crate::error::{AppResult, render_error};
use crate::store_handler::get_store_from_depot;

async fn load_month_view(req: &Request, depot: &Depot) -> AppResult<MonthView> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;

    // Unparseable values fall back to today like missing ones
    let year = req.query::<i32>("year");
    let month = req.query::<i32>("month");

    Ok(month_view(&store, owner, year, month, Local::now().date_naive()).await?)
}

/// ## Summary
/// GET /calendar?year=&month= - Month grid, navigation and the user's events
///
/// Out-of-range months roll over into the neighbouring year.
///
/// ## Errors
/// Returns HTTP 401 if not authenticated
/// Returns HTTP 400 if the year is outside the supported range
#[handler]
async fn calendar_view(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match load_month_view(req, depot).await {
        Ok(view) => res.render(Json(view)),
        Err(e) => render_error(res, depot, e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CALENDAR_ROUTE_COMPONENT).get(calendar_view)
}
