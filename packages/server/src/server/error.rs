//! JSON error responses for the HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use identity_client::IdentityError;
use serde::Serialize;

use crate::common::validation::FormErrors;
use crate::domains::auth::AuthError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FormErrors>,
}

/// Error returned by a handler: a status code plus `{ error, fields? }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    fields: Option<FormErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn unauthenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthenticated: valid access token required")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Validation(fields) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Form validation failed".to_string(),
                fields: Some(fields),
            },
            AuthError::InvalidSession => Self::unauthenticated(),
            AuthError::Provider(e) => Self::from_provider(e),
        }
    }
}

impl ApiError {
    /// Rejections carry the provider's own message ("Invalid login credentials", ...)
    /// for the form to show. Transport and decoding failures stay server-side.
    fn from_provider(error: anyhow::Error) -> Self {
        match error.downcast_ref::<IdentityError>() {
            Some(IdentityError::Auth(message)) | Some(IdentityError::Api { message, .. }) => {
                Self::bad_request(message.clone())
            }
            Some(upstream) => {
                tracing::warn!(error = %upstream, "Identity provider unavailable");
                Self::bad_gateway("Identity service unavailable")
            }
            None => Self::bad_request(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            fields: self.fields,
        };
        (self.status, Json(body)).into_response()
    }
}
