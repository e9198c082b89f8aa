//! Client for the hosted identity/storage provider.
//!
//! Speaks the provider's two REST surfaces:
//! - `/auth/v1/*` for email/password accounts and sessions
//! - `/rest/v1/<table>` for the `users` profile lookup and `feedback` inserts
//!
//! Every request carries the project's anon key in the `apikey` header.
//! Session-scoped calls additionally send the user's access token as bearer.

pub mod error;
pub mod models;

pub use error::{IdentityError, Result};
pub use models::{FeedbackRow, Session, User, UserMetadata, UserProfile};

use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::models::{ErrorBody, PasswordGrantBody, SignUpBody};

#[derive(Debug, Clone)]
pub struct IdentityOptions {
    pub url: String,
    pub anon_key: String,
    /// Where confirmation emails send the user after sign-up
    pub email_redirect_to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IdentityService {
    options: IdentityOptions,
    http_client: Client,
}

impl IdentityService {
    pub fn new(options: IdentityOptions) -> Result<Self> {
        if options.url.trim().is_empty() {
            return Err(IdentityError::Config("identity URL is empty".into()));
        }
        if options.anon_key.trim().is_empty() {
            return Err(IdentityError::Config("identity anon key is empty".into()));
        }

        let options = IdentityOptions {
            url: options.url.trim_end_matches('/').to_string(),
            ..options
        };

        Ok(Self {
            options,
            http_client: Client::new(),
        })
    }

    pub fn options(&self) -> &IdentityOptions {
        &self.options
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.options.url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.options.url, table)
    }

    fn anon_headers(&self) -> Result<header::HeaderMap> {
        self.bearer_headers(&self.options.anon_key)
    }

    fn bearer_headers(&self, token: &str) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            self.options
                .anon_key
                .parse()
                .map_err(|_| IdentityError::Config("anon key is not a valid header".into()))?,
        );
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| IdentityError::Config("token is not a valid header".into()))?,
        );
        Ok(headers)
    }

    /// Create an account. The display name is stored as user metadata.
    pub async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<()> {
        let body = SignUpBody {
            email,
            password,
            data: UserMetadata {
                display_name: Some(display_name.to_string()),
            },
        };

        let mut request = self
            .http_client
            .post(self.auth_url("signup"))
            .headers(self.anon_headers()?)
            .json(&body);
        if let Some(redirect) = &self.options.email_redirect_to {
            request = request.query(&[("redirect_to", redirect.as_str())]);
        }

        let response = request.send().await.map_err(network_error)?;
        check_status(response, true).await?;

        debug!("Identity sign-up accepted");
        Ok(())
    }

    /// Exchange email and password for a session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http_client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .headers(self.anon_headers()?)
            .json(&PasswordGrantBody { email, password })
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, true).await?;
        response
            .json::<Session>()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }

    /// Look up the user owning `access_token`.
    pub async fn get_user(&self, access_token: &str) -> Result<User> {
        let response = self
            .http_client
            .get(self.auth_url("user"))
            .headers(self.bearer_headers(access_token)?)
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, true).await?;
        response
            .json::<User>()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }

    /// Revoke the session behind `access_token`.
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let response = self
            .http_client
            .post(self.auth_url("logout"))
            .headers(self.bearer_headers(access_token)?)
            .send()
            .await
            .map_err(network_error)?;

        check_status(response, true).await?;
        Ok(())
    }

    /// Fetch the `users` profile row for `user_id`, if one exists.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let id_filter = format!("eq.{}", user_id);
        let response = self
            .http_client
            .get(self.rest_url("users"))
            .query(&[("select", "name"), ("id", id_filter.as_str())])
            .headers(self.anon_headers()?)
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, false).await?;
        let rows = response
            .json::<Vec<UserProfile>>()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))?;

        Ok(rows.into_iter().next())
    }

    /// Insert one row into the `feedback` table.
    pub async fn insert_feedback(&self, row: &FeedbackRow) -> Result<()> {
        let response = self
            .http_client
            .post(self.rest_url("feedback"))
            .headers(self.anon_headers()?)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(network_error)?;

        check_status(response, false).await?;
        Ok(())
    }
}

fn network_error(e: reqwest::Error) -> IdentityError {
    warn!(error = %e, "Request to identity provider failed");
    IdentityError::Network(e.to_string())
}

/// Pass successful responses through; turn everything else into an error.
///
/// On auth endpoints, 400/401/403/422 mean the credentials or token were
/// rejected and map to [`IdentityError::Auth`].
async fn check_status(response: Response, auth_endpoint: bool) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    warn!(status = %status, error = %message, "Identity provider returned an error");

    Err(classify_error(status, message, auth_endpoint))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| body.to_string())
}

fn classify_error(status: StatusCode, message: String, auth_endpoint: bool) -> IdentityError {
    let rejected = matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::UNPROCESSABLE_ENTITY
    );

    if auth_endpoint && rejected {
        IdentityError::Auth(message)
    } else {
        IdentityError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> IdentityOptions {
        IdentityOptions {
            url: "https://project.example.co/".to_string(),
            anon_key: "anon-key".to_string(),
            email_redirect_to: None,
        }
    }

    #[test]
    fn test_urls_are_built_from_trimmed_base() {
        let service = IdentityService::new(options()).unwrap();

        assert_eq!(service.auth_url("signup"), "https://project.example.co/auth/v1/signup");
        assert_eq!(service.rest_url("feedback"), "https://project.example.co/rest/v1/feedback");
    }

    #[test]
    fn test_missing_anon_key_is_rejected() {
        let result = IdentityService::new(IdentityOptions {
            anon_key: String::new(),
            ..options()
        });

        assert!(matches!(result, Err(IdentityError::Config(_))));
    }

    #[test]
    fn test_headers_carry_key_and_bearer() {
        let service = IdentityService::new(options()).unwrap();
        let headers = service.bearer_headers("user-token").unwrap();

        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[header::AUTHORIZATION], "Bearer user-token");
    }

    #[test]
    fn test_error_message_prefers_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(body), "Invalid login credentials");
        assert_eq!(error_message(r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_rejections_on_auth_endpoints_are_auth_errors() {
        let err = classify_error(StatusCode::BAD_REQUEST, "bad".into(), true);
        assert!(matches!(err, IdentityError::Auth(_)));

        let err = classify_error(StatusCode::BAD_REQUEST, "bad".into(), false);
        assert!(matches!(err, IdentityError::Api { status: 400, .. }));

        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into(), true);
        assert!(matches!(err, IdentityError::Api { status: 500, .. }));
    }

    #[test]
    fn test_unreachable_provider_is_network_error() {
        let service = IdentityService::new(IdentityOptions {
            url: "http://127.0.0.1:1".to_string(),
            ..options()
        })
        .unwrap();

        let result = tokio_test::block_on(service.sign_in_with_password("a@b.co", "pass1234"));

        assert!(matches!(result, Err(IdentityError::Network(_))));
    }
}
