//! Test harness: a scratch CSV artifact plus a router wired to a mock model.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use menu_core::domains::menu::models::MenuEntry;
use menu_core::domains::menu::store::MenuStore;
use menu_core::kernel::{MockAI, ServerDeps, TestDependencies};
use menu_core::server::build_app;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestHarness {
    pub deps: ServerDeps,
    pub ai: MockAI,
    pub csv_path: PathBuf,
    // Keep the directory alive for the whole test
    _dir: TempDir,
}

impl TestHarness {
    /// Harness over a CSV containing `entries`.
    pub fn with_entries(entries: Vec<MenuEntry>, ai: MockAI) -> Self {
        let harness = Self::without_artifact(ai);
        MenuStore::new(harness.csv_path.clone())
            .save(entries)
            .expect("Failed to write test CSV");
        harness
    }

    /// Harness whose CSV path does not exist yet.
    pub fn without_artifact(ai: MockAI) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let csv_path = dir.path().join("menu.csv");
        let (deps, ai) = TestDependencies::new(csv_path.clone())
            .mock_ai(ai)
            .into_server_deps();

        Self {
            deps,
            ai,
            csv_path,
            _dir: dir,
        }
    }

    pub fn router(&self) -> Router {
        build_app(self.deps.clone(), &["http://localhost:3000".to_string()])
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, &body.to_string()).await
    }

    /// POST `body` verbatim with a JSON content type.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
