//! Record-store ports: the boundary between request handlers and
//! persistence. Handlers depend only on these traits; adapters under
//! `outbound::persistence` implement them.

mod category_repository;
mod question_repository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::CategoryRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::QuestionRepository;

/// Failures reported by a record store.
///
/// This layer has no retry or backoff: a store failure propagates
/// immediately and the handler maps it to the failure kind inferred from the
/// surrounding operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not service the request.
    #[error("record store unavailable: {reason}")]
    Unavailable {
        /// Adapter-specific description of the fault.
        reason: String,
    },
}

impl StoreError {
    /// Construct an [`StoreError::Unavailable`] from any displayable reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
