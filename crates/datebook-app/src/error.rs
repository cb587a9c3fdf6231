use salvo::http::header::WWW_AUTHENTICATE;
use salvo::http::{HeaderValue, StatusCode};
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use datebook_core::error::CoreError;
use datebook_service::error::ServiceError;

use crate::config::get_config_from_depot;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

const fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CoreError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl AppError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => match err {
                ServiceError::DuplicateUser(_) => StatusCode::CONFLICT,
                ServiceError::InvalidCredentials | ServiceError::NotAuthenticated => {
                    StatusCode::UNAUTHORIZED
                }
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::ValidationError(_) | ServiceError::RfcError(_) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::CoreError(core) => core_status(core),
                ServiceError::InvalidConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(core) => core_status(core),
        }
    }
}

/// ## Summary
/// Renders `err` as `{"error": "..."}` with its mapped status code.
///
/// Server errors are logged and replaced by a generic message. A 401 carries a
/// `WWW-Authenticate: Basic` challenge for the configured realm.
pub fn render_error(res: &mut salvo::Response, depot: &salvo::Depot, err: impl Into<AppError>) {
    let err = err.into();
    let status = err.status_code();

    let message = if status.is_server_error() {
        tracing::error!(error = ?err, "Request failed");
        "Internal server error".to_string()
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
        err.to_string()
    };

    if status == StatusCode::UNAUTHORIZED {
        match get_config_from_depot(depot) {
            Ok(config) => {
                let challenge = format!("Basic realm=\"{}\"", config.auth.realm);
                match HeaderValue::from_str(&challenge) {
                    Ok(value) => {
                        res.headers_mut().insert(WWW_AUTHENTICATE, value);
                    }
                    Err(e) => tracing::warn!(error = %e, "Realm is not a valid header value"),
                }
            }
            Err(e) => tracing::warn!(error = ?e, "No config in depot, omitting auth challenge"),
        }
    }

    res.status_code(status);
    res.render(Json(ErrorResponse { error: message }));
}
