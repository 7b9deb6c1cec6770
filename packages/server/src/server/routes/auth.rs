use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::common::auth::AuthError;
use crate::common::Validate;
use crate::domains::auth::actions::{login, register};
use crate::domains::auth::{AuthSession, LoginInput, RegisterInput, TOKEN_TTL_HOURS};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AUTH_COOKIE;

/// `POST /api/auth/register`
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let session = register(input, &state.deps)
        .await
        .map_err(|e| auth_failure(e, "Registration failed"))?;

    session_response(session, state.secure_cookies)
}

/// `POST /api/auth/login`
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let session = login(input, &state.deps)
        .await
        .map_err(|e| auth_failure(e, "Authentication failed"))?;

    session_response(session, state.secure_cookies)
}

fn auth_failure(err: AuthError, message: &'static str) -> ApiError {
    match err {
        AuthError::InvalidCredentials => ApiError::Unauthorized("Invalid credentials"),
        AuthError::UserAlreadyExists => ApiError::Conflict("User already exists"),
        AuthError::AuthenticationRequired | AuthError::InvalidToken => {
            ApiError::Unauthorized("Unauthorized")
        }
        other => ApiError::internal(message, other),
    }
}

/// JSON body plus the session cookie
fn session_response(session: AuthSession, secure: bool) -> Result<Response, ApiError> {
    let cookie = session_cookie(&session.token, secure);
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::internal("Authentication failed", e))?;

    let mut response = Json(session).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}

fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
        AUTH_COOKIE,
        token,
        TOKEN_TTL_HOURS * 60 * 60
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
