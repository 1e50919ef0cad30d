//! Trivia record types.
//!
//! Wire field names follow the established API: snake_case throughout, with
//! the category label serialised as `type`. Records are never mutated in
//! place; a question is created once and deleted at most once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Store-assigned identifier, never reused within a store lifetime.
    #[schema(example = 11)]
    pub id: i64,
    /// The question text.
    #[schema(example = "Which country won the first ever soccer World Cup in 1930?")]
    pub question: String,
    /// The answer text.
    #[schema(example = "Uruguay")]
    pub answer: String,
    /// Referencing [`Category::id`]; not checked at write time.
    #[schema(example = 6)]
    pub category: i64,
    /// Difficulty score, 1-5 in practice but unconstrained.
    #[schema(example = 4)]
    pub difficulty: i64,
}

/// A question awaiting insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Referencing [`Category::id`]; not checked at write time.
    pub category: i64,
    /// Difficulty score.
    pub difficulty: i64,
}

impl NewQuestion {
    /// Attach a store-assigned id, producing the stored record.
    #[must_use]
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A question category. Read-only from this service's perspective: no
/// endpoint creates, updates, or deletes categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Display label.
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
}

/// Build the id-to-display-name mapping for a category listing.
///
/// `BTreeMap` keeps the mapping ordered by id, matching the store's ordered
/// scan; JSON object keys come out as decimal strings.
#[must_use]
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}
