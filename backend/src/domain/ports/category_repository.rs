//! Driving port for category reads.
//!
//! Categories are pre-seeded and read-only; the port exposes an ordered
//! full scan and a point lookup.

use async_trait::async_trait;

use crate::domain::Category;
use crate::domain::ports::StoreError;

/// Read access to the category records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list_all(&self) -> Result<Vec<Category>, StoreError>;

    /// The category with the given id, if present.
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, StoreError>;
}
