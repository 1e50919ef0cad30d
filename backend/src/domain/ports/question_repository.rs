//! Driving port for question reads and writes.

use async_trait::async_trait;

use crate::domain::ports::StoreError;
use crate::domain::{NewQuestion, Question};

/// Access to the question records.
///
/// Scans and filters return records ordered by id. `search` matches the term
/// as a case-insensitive substring of the question text; the empty term
/// matches everything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id.
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// The question with the given id, if present.
    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError>;

    /// Questions whose category equals `category`, ordered by id.
    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, case-insensitively.
    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Persist a new question and return its assigned id.
    async fn insert(&self, question: NewQuestion) -> Result<i64, StoreError>;

    /// Delete the question with the given id. Returns `false` when no such
    /// record existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}
