//! Shared query-parameter types.

use pagination::PageNumber;
use serde::Deserialize;

/// The `?page=N` query parameter accepted by every paginated endpoint.
///
/// Parsing is lenient: a non-numeric value is treated as absent and defaults
/// to page 1, so the parameter is carried as a raw string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// The requested page number, defaulting to page 1.
    #[must_use]
    pub fn page_number(&self) -> PageNumber {
        PageNumber::from_query(self.page.as_deref())
    }
}
