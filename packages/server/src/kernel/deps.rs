//! Server dependencies for domain actions (using traits for testability)
//!
//! Every request handler receives the same `ServerDeps`. The language model
//! is an explicitly constructed handle so tests can swap in `MockAI`.

use std::sync::Arc;

use crate::domains::menu::store::MenuStore;
use crate::kernel::BaseAI;

#[derive(Clone)]
pub struct ServerDeps {
    /// Text-generation collaborator used for menu analysis.
    pub ai: Arc<dyn BaseAI>,
    /// Where the extractor's CSV artifact lives. Read on every request.
    pub menu_store: MenuStore,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, menu_store: MenuStore) -> Self {
        Self { ai, menu_store }
    }
}
