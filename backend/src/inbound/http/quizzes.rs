//! Quiz-play endpoint.
//!
//! ```text
//! POST /quizzes {"previous_questions": [..], "quiz_category": {"id": N}}
//! ```

use actix_web::{post, web};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::quiz::draw_question;
use crate::domain::{ErrorEnvelope, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::store_unprocessable;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_quiz_field;

/// The category selector inside a quiz request. Id `0` selects all
/// categories.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category id, or `0` for all categories.
    pub id: i64,
}

/// Request body for `POST /quizzes`.
///
/// Both fields are required; they are optional here so absence can be
/// reported as a malformed request rather than a decode failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already asked this round.
    pub previous_questions: Option<Vec<i64>>,
    /// Category to draw from.
    pub quiz_category: Option<QuizCategory>,
}

/// Success envelope for `POST /quizzes`.
///
/// Both question keys are always present; they are `null` once the round has
/// exhausted the category.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Id of the drawn question, or `null` when none remain.
    pub question_id: Option<i64>,
    /// The drawn question, or `null` when none remain.
    pub question: Option<Question>,
}

/// Draw one random unseen question from the requested category.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A fresh question, or null when exhausted", body = QuizResponse),
        (status = 400, description = "Missing selection field", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "playQuiz"
)]
#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequest>,
) -> ApiResult<web::Json<QuizResponse>> {
    let body = payload.into_inner();
    let previous = require_quiz_field(body.previous_questions, "previous_questions")?;
    let category = require_quiz_field(body.quiz_category, "quiz_category")?;

    let candidates = if category.id == 0 {
        state.questions.list_all().await
    } else {
        state.questions.filter_by_category(category.id).await
    }
    .map_err(store_unprocessable)?;

    let mut rng = SmallRng::from_entropy();
    let drawn = draw_question(&candidates, &previous, &mut rng).cloned();

    Ok(web::Json(QuizResponse {
        success: true,
        question_id: drawn.as_ref().map(|question| question.id),
        question: drawn,
    }))
}
