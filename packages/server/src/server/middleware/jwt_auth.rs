use crate::common::auth::UserRole;
use crate::common::UserId;
use crate::domains::auth::JwtService;
use crate::server::error::ApiError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Name of the session cookie set on login and registration
pub const AUTH_COOKIE: &str = "auth-token";

/// Authenticated user information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

/// JWT authentication middleware
///
/// Reads the token from the Authorization header or the session cookie, verifies it,
/// and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(request.headers(), &jwt_service);

    if let Some(user) = auth_user {
        debug!("Authenticated user: {} (role: {})", user.user_id, user.role);
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify JWT token from request headers.
///
/// The Authorization header wins over the cookie; if it does not verify the
/// cookie is tried.
fn extract_auth_user(headers: &HeaderMap, jwt_service: &JwtService) -> Option<AuthUser> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        // handle both "Bearer <token>" and raw token
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).trim());

    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| cookie_value(v, AUTH_COOKIE));

    [from_header, from_cookie]
        .into_iter()
        .flatten()
        .filter(|token| !token.is_empty())
        .find_map(|token| jwt_service.verify_token(token).ok())
        .map(|claims| AuthUser {
            user_id: UserId::from_uuid(claims.user_id),
            email: claims.email,
            role: claims.role,
        })
}

/// Value of cookie `name` in a `Cookie` header
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Handlers that take an `AuthUser` reject anonymous requests with 401
#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized("Unauthorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    fn token(jwt_service: &JwtService, user_id: UserId) -> String {
        jwt_service
            .create_token(user_id, "pat@example.com".to_string(), UserRole::Patient)
            .unwrap()
    }

    fn headers(pairs: &[(header::HeaderName, String)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = token(&jwt_service, user_id);

        let headers = headers(&[(header::AUTHORIZATION, format!("Bearer {}", token))]);

        let auth_user = extract_auth_user(&headers, &jwt_service);
        assert!(auth_user.is_some());
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = token(&jwt_service, user_id);

        let headers = headers(&[(header::AUTHORIZATION, token)]);

        let auth_user = extract_auth_user(&headers, &jwt_service);
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = token(&jwt_service, user_id);

        let headers = headers(&[(
            header::COOKIE,
            format!("theme=dark; {}={}; other=1", AUTH_COOKIE, token),
        )]);

        let auth_user = extract_auth_user(&headers, &jwt_service).unwrap();
        assert_eq!(auth_user.user_id, user_id);
        assert_eq!(auth_user.email, "pat@example.com");
        assert_eq!(auth_user.role, UserRole::Patient);
    }

    #[test]
    fn test_cookie_used_when_header_invalid() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = token(&jwt_service, user_id);

        let headers = headers(&[
            (header::AUTHORIZATION, "Bearer invalid_token".to_string()),
            (header::COOKIE, format!("{}={}", AUTH_COOKIE, token)),
        ]);

        assert!(extract_auth_user(&headers, &jwt_service).is_some());
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = service();
        assert!(extract_auth_user(&HeaderMap::new(), &jwt_service).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = service();
        let headers = headers(&[(header::AUTHORIZATION, "Bearer invalid_token".to_string())]);

        assert!(extract_auth_user(&headers, &jwt_service).is_none());
    }

    #[test]
    fn test_token_from_other_issuer_rejected() {
        let other = JwtService::new("test_secret", "someone_else".to_string());
        let token = token(&other, UserId::new());
        let headers = headers(&[(header::AUTHORIZATION, format!("Bearer {}", token))]);

        assert!(extract_auth_user(&headers, &service()).is_none());
    }

    #[test]
    fn test_cookie_value() {
        assert_eq!(cookie_value("a=1; auth-token=xyz", "auth-token"), Some("xyz"));
        assert_eq!(cookie_value("auth-token-old=1", "auth-token"), None);
        assert_eq!(cookie_value("", "auth-token"), None);
    }
}
