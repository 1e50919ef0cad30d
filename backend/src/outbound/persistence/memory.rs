//! In-memory record store.
//!
//! Implements both repository ports over `RwLock`-guarded vectors kept
//! ordered by id. Ids come from a monotonically increasing counter and are
//! never reused after deletion within the store's lifetime.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{CategoryRepository, QuestionRepository, StoreError};
use crate::domain::{Category, NewQuestion, Question};

#[derive(Debug, Default)]
struct StoreInner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i64,
}

/// Thread-safe in-memory store backing both repository ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    /// An empty store. Categories are expected to be pre-seeded before the
    /// store is useful; see [`InMemoryStore::new`].
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with the given records. Both collections are sorted by
    /// id; the question id counter starts past the highest seeded id.
    #[must_use]
    pub fn new(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|category| category.id);
        questions.sort_by_key(|question| question.id);
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(StoreInner {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// A store pre-loaded with the classic trivia fixture: six categories
    /// and nineteen questions. Category 2 ("Art") holds exactly the
    /// questions 16, 17, and 18.
    #[must_use]
    pub fn with_trivia_seed() -> Self {
        Self::new(seed_categories(), seed_questions())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, StoreError> {
        self.inner.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, StoreError> {
        self.inner.write().map_err(poisoned)
    }
}

fn poisoned<G>(_: PoisonError<G>) -> StoreError {
    StoreError::unavailable("store lock poisoned")
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read()?.questions.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned())
    }

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .questions
            .iter()
            .filter(|question| question.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let inner = self.read()?;
        Ok(inner
            .questions
            .iter()
            .filter(|question| question.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let mut inner = self.write()?;
        let id = inner.next_question_id;
        inner.next_question_id += 1;
        // Monotonic ids keep the vector ordered on push.
        inner.questions.push(question.with_id(id));
        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let before = inner.questions.len();
        inner.questions.retain(|question| question.id != id);
        Ok(inner.questions.len() < before)
    }
}

fn seed_categories() -> Vec<Category> {
    [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ]
    .into_iter()
    .map(|(id, kind)| Category {
        id,
        kind: kind.to_owned(),
    })
    .collect()
}

#[rustfmt::skip]
fn seed_questions() -> Vec<Question> {
    let rows: [(i64, &str, &str, i64, i64); 19] = [
        (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
        (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        (16, "Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
        (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        (19, "Which planet is known as the Red Planet?", "Mars", 1, 1),
        (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ];
    rows.into_iter()
        .map(|(id, question, answer, category, difficulty)| Question {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
        .collect()
}
