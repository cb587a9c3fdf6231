use chrono::Utc;
use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::{Deserialize, Serialize};

use datebook_core::constants::{EVENTS_ROUTE_COMPONENT, ICS_CONTENT_TYPE};
use datebook_core::error::CoreError;
use datebook_db::model::event::{Event, EventId};
use datebook_service::auth::get_user_from_depot;
use datebook_service::event::{
    EventOverview, NewEventInput, create_event, delete_event, event_overview, events_on_date,
};
use datebook_service::export::{IcsExport, export_ics};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_error};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Event creation payload, accepted as JSON or form data
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl From<CreateEventRequest> for NewEventInput {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            date: req.date,
            time: req.time,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: EventId,
}

#[derive(Debug, Serialize)]
pub struct EventsOnDateResponse {
    pub date: String,
    pub events: Vec<Event>,
}

fn path_param(req: &Request, name: &str) -> AppResult<String> {
    req.param::<String>(name)
        .ok_or_else(|| AppError::InvalidRequest(format!("missing path parameter '{name}'")))
}

async fn list(depot: &Depot) -> AppResult<EventOverview> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    Ok(event_overview(&store, owner).await)
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Event> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;

    let body = req.parse_body::<CreateEventRequest>().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to parse event");
        AppError::InvalidRequest("body must carry title and date".to_string())
    })?;

    Ok(create_event(&store, owner, body.into()).await?)
}

async fn on_date(req: &Request, depot: &Depot) -> AppResult<EventsOnDateResponse> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let date = path_param(req, "date")?;

    let events = events_on_date(&store, owner, &date).await?;
    Ok(EventsOnDateResponse { date, events })
}

async fn delete(req: &Request, depot: &Depot) -> AppResult<()> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let id = EventId::from(path_param(req, "id")?);

    delete_event(&store, owner, &id).await;
    Ok(())
}

async fn export(req: &Request, depot: &Depot) -> AppResult<(IcsExport, HeaderValue)> {
    let owner = get_user_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let config = get_config_from_depot(depot)?;
    let id = EventId::from(path_param(req, "id")?);

    let export = export_ics(&store, owner, &id, config.export.text_mode, Utc::now()).await?;
    let disposition = HeaderValue::from_str(&format!("attachment; filename={}", export.filename))
        .map_err(|_e| CoreError::InvariantViolation("export filename is a valid header value"))?;

    Ok((export, disposition))
}

/// ## Summary
/// GET /events - The user's events grouped by date plus a flat list
///
/// ## Errors
/// Returns HTTP 401 if not authenticated
#[handler]
async fn list_events(depot: &mut Depot, res: &mut Response) {
    match list(depot).await {
        Ok(overview) => res.render(Json(overview)),
        Err(e) => render_error(res, depot, e),
    }
}

/// ## Summary
/// POST /events - Creates an event and returns its id
///
/// ## Errors
/// Returns HTTP 400 for a blank title or a date that is not `YYYY-MM-DD`
/// Returns HTTP 401 if not authenticated
#[handler]
async fn create_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match create(req, depot).await {
        Ok(event) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(CreatedResponse { id: event.id }));
        }
        Err(e) => render_error(res, depot, e),
    }
}

/// ## Summary
/// GET /events/date/{date} - The user's events on one date
#[handler]
async fn events_on_date_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match on_date(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, depot, e),
    }
}

/// ## Summary
/// DELETE /events/{id} - Deletes an owned event
///
/// Unknown and foreign ids answer 204 as well, so the response never reveals
/// whether another user's event exists.
#[handler]
async fn delete_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match delete(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_error(res, depot, e),
    }
}

/// ## Summary
/// GET /events/{id}/export - Downloads an owned event as an `.ics` file
///
/// ## Errors
/// Returns HTTP 404 if the event does not exist or belongs to someone else
#[handler]
async fn export_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match export(req, depot).await {
        Ok((export, disposition)) => {
            let headers = res.headers_mut();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ICS_CONTENT_TYPE));
            headers.insert(CONTENT_DISPOSITION, disposition);
            res.status_code(StatusCode::OK);
            res.body(export.body);
        }
        Err(e) => render_error(res, depot, e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(list_events)
        .post(create_event_handler)
        .push(Router::with_path("date/{date}").get(events_on_date_handler))
        .push(
            Router::with_path("{id}")
                .delete(delete_event_handler)
                .push(Router::with_path("export").get(export_event_handler)),
        )
}
