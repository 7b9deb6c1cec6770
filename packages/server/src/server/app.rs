//! Application setup and server configuration.

use std::time::Duration;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    analyze_symptoms_handler, generate_diet_plan_handler, generate_roadmap_handler,
    get_profile_handler, health_handler, list_assessments_handler, list_diet_plans_handler,
    list_roadmaps_handler, login_handler, register_handler, search_providers_handler,
    update_profile_handler,
};

/// LLM-backed endpoints can take a while; everything else is far below this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String], secure_cookies: bool) -> Router {
    let jwt_service = deps.jwt_service.clone();

    let app_state = AppState {
        deps,
        secure_cookies,
    };

    Router::new()
        .route("/health", get(health_handler))
        // Auth
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        // Profile
        .route(
            "/api/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        // Symptoms
        .route("/api/symptoms", get(list_assessments_handler))
        .route("/api/symptoms/analyze", post(analyze_symptoms_handler))
        // Health roadmap
        .route(
            "/api/health-roadmap/generate",
            get(list_roadmaps_handler).post(generate_roadmap_handler),
        )
        // Diet plan
        .route(
            "/api/diet-plan/generate",
            get(list_diet_plans_handler).post(generate_diet_plan_handler),
        )
        // Providers
        .route("/api/providers/search", get(search_providers_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured (development); otherwise only the
/// listed origins, with credentials so the session cookie is sent.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}
