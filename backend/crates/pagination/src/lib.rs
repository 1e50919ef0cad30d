//! Page-number pagination primitives shared by trivia backend endpoints.
//!
//! Every paginated endpoint slices an ordered collection into fixed-size
//! pages of [`PAGE_SIZE`] items addressed by a 1-based [`PageNumber`]. A page
//! beyond the end of the collection yields an empty slice; callers decide
//! whether that constitutes an error.

use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of items on a full page, fixed across all paginated endpoints.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
///
/// Construction is infallible through [`PageNumber::from_query`], which
/// treats absent, non-numeric, or non-positive input as page 1, and fallible
/// through [`FromStr`] for callers that want to reject bad input instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page; the default when a request carries no usable value.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN);

    /// Construct from a raw count, returning `None` for zero.
    #[must_use]
    pub const fn new(page: usize) -> Option<Self> {
        match NonZeroUsize::new(page) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The page number as a plain integer (always >= 1).
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Lenient parse of an optional query-parameter value.
    ///
    /// Absent values, values that fail to parse as an integer, and
    /// non-positive values all fall back to [`PageNumber::DEFAULT`].
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    /// Offset of the first item on this page.
    #[must_use]
    pub const fn start_offset(self) -> usize {
        (self.0.get() - 1) * PAGE_SIZE
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strict parse failures for [`PageNumber`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePageError {
    /// The input was not an integer at all.
    #[error("page must be an integer, got {0:?}")]
    NotAnInteger(String),
    /// The input was an integer but not a positive one.
    #[error("page must be a positive integer")]
    NotPositive,
}

impl FromStr for PageNumber {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: usize = s
            .trim()
            .parse()
            .map_err(|_| match s.trim().parse::<isize>() {
                Ok(_) => ParsePageError::NotPositive,
                Err(_) => ParsePageError::NotAnInteger(s.to_owned()),
            })?;
        Self::new(raw).ok_or(ParsePageError::NotPositive)
    }
}

/// Return the slice of `items` covered by `page`.
///
/// The slice is `[(p - 1) * PAGE_SIZE, p * PAGE_SIZE)` clamped to the
/// collection bounds; pages past the end are empty, never an error.
#[must_use]
pub fn page_slice<T>(items: &[T], page: PageNumber) -> &[T] {
    let start = page.start_offset();
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbered(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("3"), 3)]
    #[case(Some(" 2 "), 2)]
    #[case(Some("abc"), 1)]
    #[case(Some(""), 1)]
    #[case(Some("0"), 1)]
    #[case(Some("-4"), 1)]
    #[case(Some("2.5"), 1)]
    fn from_query_is_lenient(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(PageNumber::from_query(raw).get(), expected);
    }

    #[rstest]
    #[case("1", Ok(1))]
    #[case("10", Ok(10))]
    #[case("0", Err(ParsePageError::NotPositive))]
    #[case("-1", Err(ParsePageError::NotPositive))]
    #[case("one", Err(ParsePageError::NotAnInteger("one".into())))]
    fn from_str_is_strict(#[case] raw: &str, #[case] expected: Result<usize, ParsePageError>) {
        let parsed = raw.parse::<PageNumber>().map(PageNumber::get);
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case(19, 1, 1, 10)]
    #[case(19, 2, 11, 19)]
    #[case(10, 1, 1, 10)]
    #[case(5, 1, 1, 5)]
    fn page_slice_returns_expected_window(
        #[case] total: usize,
        #[case] page: usize,
        #[case] first: usize,
        #[case] last: usize,
    ) {
        let items = numbered(total);
        let page = PageNumber::new(page).unwrap_or_default();
        let slice = page_slice(&items, page);
        assert_eq!(slice.first().copied(), Some(first));
        assert_eq!(slice.last().copied(), Some(last));
        assert!(slice.len() <= PAGE_SIZE);
    }

    #[rstest]
    #[case(19, 3)]
    #[case(19, 100)]
    #[case(0, 1)]
    #[case(10, 2)]
    fn out_of_range_pages_are_empty(#[case] total: usize, #[case] page: usize) {
        let items = numbered(total);
        let page = PageNumber::new(page).unwrap_or_default();
        assert!(page_slice(&items, page).is_empty());
    }

    #[test]
    fn pagination_is_stable_between_calls() {
        let items = numbered(19);
        let page = PageNumber::from_query(Some("2"));
        assert_eq!(page_slice(&items, page), page_slice(&items, page));
    }
}
