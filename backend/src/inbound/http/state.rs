//! Shared HTTP adapter state.
//!
//! Handlers receive the store handle through `actix_web::web::Data` so they
//! depend only on the repository ports and stay testable without I/O. There
//! is no ambient global: the process wires one state at startup.

use std::sync::Arc;

use crate::domain::ports::{CategoryRepository, QuestionRepository};
use crate::outbound::persistence::InMemoryStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Category reads.
    pub categories: Arc<dyn CategoryRepository>,
    /// Question reads and writes.
    pub questions: Arc<dyn QuestionRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// Back both ports with a single in-memory store.
    #[must_use]
    pub fn from_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            categories: store.clone(),
            questions: store,
        }
    }
}
