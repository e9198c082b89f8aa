use axum::{middleware::Next, response::Response};
use tracing::debug;

/// Access token taken from the Authorization header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Bearer token middleware
///
/// Copies the token from the Authorization header into request extensions.
/// Verification is left to the identity provider; requests without a token
/// continue without one (guest access).
pub async fn bearer_token_middleware(
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer_token(&request) {
        request.extensions_mut().insert(token);
    } else {
        debug!("No access token on request");
    }

    next.run(request).await
}

/// Extract the token from the Authorization header
fn extract_bearer_token(request: &axum::http::Request<axum::body::Body>) -> Option<BearerToken> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();
    if token.is_empty() {
        return None;
    }

    Some(BearerToken(token.to_string()))
}
