//! Application setup and server configuration.

use std::sync::Arc;

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
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::bearer_token_middleware;
use crate::server::routes::{
    chat_handler, feedback_handler, format_handler, guest_handler, health_handler,
    loading_message_handler, quick_reply_handler, scrub_handler, session_handler,
    sign_in_handler, sign_out_handler, sign_up_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// `allowed_origins` are the browser origins the web client is served from;
/// entries that are not valid header values are skipped with a warning.
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let app_state = AppState {
        deps: Arc::new(server_deps),
    };

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

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let api = Router::new()
        // Chat
        .route("/chat", post(chat_handler))
        .route("/chat/quick-reply", post(quick_reply_handler))
        .route("/chat/loading-message", get(loading_message_handler))
        .route("/feedback", post(feedback_handler))
        // Auth
        .route("/auth/sign-up", post(sign_up_handler))
        .route("/auth/sign-in", post(sign_in_handler))
        .route("/auth/sign-out", post(sign_out_handler))
        .route("/auth/session", get(session_handler))
        .route("/auth/guest", post(guest_handler))
        // Text previews
        .route("/scrub", post(scrub_handler))
        .route("/format", post(format_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(bearer_token_middleware))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
