use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};

use datebook_service::auth::{login, register};

use crate::credentials_handler::get_verifier_from_depot;
use crate::error::{AppError, AppResult, render_error};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Registration and login payload, accepted as JSON or form data
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// ## Summary
/// Registration response payload
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
}

/// ## Summary
/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
    pub message: String,
}

async fn parse_credentials(req: &mut Request) -> AppResult<CredentialsRequest> {
    req.parse_body::<CredentialsRequest>().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to parse credentials");
        AppError::InvalidRequest("body must carry username and password".to_string())
    })
}

async fn register_account(req: &mut Request, depot: &Depot) -> AppResult<String> {
    let credentials = parse_credentials(req).await?;
    let store = get_store_from_depot(depot)?;
    let verifier = get_verifier_from_depot(depot)?;

    register(
        &store,
        verifier.as_ref(),
        &credentials.username,
        &credentials.password,
    )
    .await?;
    Ok(credentials.username)
}

async fn check_login(req: &mut Request, depot: &Depot) -> AppResult<String> {
    let credentials = parse_credentials(req).await?;
    let store = get_store_from_depot(depot)?;
    let verifier = get_verifier_from_depot(depot)?;

    login(
        &store,
        verifier.as_ref(),
        &credentials.username,
        &credentials.password,
    )
    .await?;
    Ok(credentials.username)
}

/// ## Summary
/// POST /app/auth/register - Register a new user with username and password
///
/// ## Side Effects
/// Stores the user with an Argon2 password hash.
///
/// ## Errors
/// Returns HTTP 400 for a missing username or password
/// Returns HTTP 409 if the username is already registered
#[handler]
async fn register_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing user registration request");

    match register_account(req, depot).await {
        Ok(username) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(RegisterResponse { username }));
        }
        Err(e) => render_error(res, depot, e),
    }
}

/// ## Summary
/// POST /app/auth/login - Verifies a username/password pair
///
/// API requests authenticate with HTTP Basic Auth; this endpoint lets clients
/// check credentials up front.
///
/// ## Errors
/// Returns HTTP 401 if credentials are invalid
#[handler]
async fn login_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing login request");

    match check_login(req, depot).await {
        Ok(username) => {
            tracing::info!(user = %username, "User logged in successfully");
            res.status_code(StatusCode::OK);
            res.render(Json(LoginResponse {
                success: true,
                username,
                message: "Login successful. Use HTTP Basic Auth for API requests.".to_string(),
            }));
        }
        Err(e) => render_error(res, depot, e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("auth")
        .push(Router::with_path("register").post(register_handler))
        .push(Router::with_path("login").post(login_handler))
}
