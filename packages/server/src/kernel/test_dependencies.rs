// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{BaseAI, ServerDeps};
use crate::domains::menu::store::MenuStore;

// =============================================================================
// Mock AI
// =============================================================================

/// Scripted language model.
///
/// Responses are returned in the order they were queued; once exhausted the
/// mock answers with an empty string. Every prompt is recorded.
#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(String::new());
        }
        responses.remove(0).map_err(|message| anyhow::anyhow!(message))
    }
}

// =============================================================================
// TestDependencies builder
// =============================================================================

pub struct TestDependencies {
    ai: MockAI,
    menu_csv: PathBuf,
}

impl TestDependencies {
    pub fn new(menu_csv: impl Into<PathBuf>) -> Self {
        Self {
            ai: MockAI::new(),
            menu_csv: menu_csv.into(),
        }
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    /// Build ServerDeps, keeping a handle to the mock for assertions.
    pub fn into_server_deps(self) -> (ServerDeps, MockAI) {
        let deps = ServerDeps::new(Arc::new(self.ai.clone()), MenuStore::new(self.menu_csv));
        (deps, self.ai)
    }
}
