//! Test harness for HTTP-level integration tests.
//!
//! Builds the real router on top of the mock collaborators from
//! `kernel::test_dependencies` and drives it with `oneshot`, so no socket or
//! backend service is involved.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use disha_core::kernel::TestDependencies;
use disha_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Status and parsed JSON body (Null when the body is empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestHarness {
    pub deps: TestDependencies,
    app: Router,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(deps.server_deps(), &[TEST_ORIGIN.to_string()]);
        Self { deps, app }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let request = request_builder(Method::GET, path, token)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: Value, token: Option<&str>) -> TestResponse {
        let request = request_builder(Method::POST, path, token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body }
    }
}

fn request_builder(method: Method, path: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
}
