use axum::{extract::Extension, http::StatusCode, Json};

use crate::domains::auth::{
    create_guest_session, resume_session, sign_in, sign_out, sign_up, GuestSession, SignInForm,
    SignUpForm, SignedIn,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::BearerToken;

/// 201 once the account exists; the user still has to confirm their email
pub async fn sign_up_handler(
    Extension(state): Extension<AppState>,
    Json(form): Json<SignUpForm>,
) -> Result<StatusCode, ApiError> {
    sign_up(&form, &state.deps).await?;
    Ok(StatusCode::CREATED)
}

pub async fn sign_in_handler(
    Extension(state): Extension<AppState>,
    Json(form): Json<SignInForm>,
) -> Result<Json<SignedIn>, ApiError> {
    Ok(Json(sign_in(&form, &state.deps).await?))
}

pub async fn session_handler(
    Extension(state): Extension<AppState>,
    token: Option<Extension<BearerToken>>,
) -> Result<Json<SignedIn>, ApiError> {
    let Extension(token) = token.ok_or_else(ApiError::unauthenticated)?;
    Ok(Json(resume_session(&token.0, &state.deps).await?))
}

pub async fn sign_out_handler(
    Extension(state): Extension<AppState>,
    token: Option<Extension<BearerToken>>,
) -> Result<StatusCode, ApiError> {
    let Extension(token) = token.ok_or_else(ApiError::unauthenticated)?;
    sign_out(&token.0, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn guest_handler() -> Json<GuestSession> {
    Json(create_guest_session())
}
