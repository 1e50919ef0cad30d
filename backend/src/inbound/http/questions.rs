//! Question endpoints.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /questions        {"question","answer","category","difficulty"}
//! DELETE /questions/{id}?page=N
//! POST   /questions/search {"searchTerm"}
//! ```

use std::collections::BTreeMap;

use actix_web::{delete, get, post, web};
use pagination::page_slice;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, ErrorEnvelope, NewQuestion, Question, category_map};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{store_not_found, store_unprocessable};
use crate::inbound::http::query::PageQuery;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_field;

/// Success envelope for `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The requested page of questions.
    pub questions: Vec<Question>,
    /// Total number of questions before paging.
    pub total_questions: usize,
    /// Display labels of the categories present on this page, in order of
    /// first appearance.
    pub current_categories: Vec<String>,
    /// Full category id-to-label mapping.
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i64, String>,
}

/// Success envelope for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Id of the removed question.
    pub deleted: i64,
    /// The requested page of the remaining questions.
    pub questions: Vec<Question>,
    /// Number of questions remaining after the deletion.
    pub total_questions: usize,
}

/// Request body for `POST /questions`.
///
/// All four fields are required; they are optional here so absence can be
/// reported as an unprocessable request rather than a decode failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    /// The question text.
    pub question: Option<String>,
    /// The answer text.
    pub answer: Option<String>,
    /// Category id; existence is not checked at write time.
    pub category: Option<i64>,
    /// Difficulty score.
    pub difficulty: Option<i64>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = Error;

    fn try_from(value: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            question: require_field(value.question, "question")?,
            answer: require_field(value.answer, "answer")?,
            category: require_field(value.category, "category")?,
            difficulty: require_field(value.difficulty, "difficulty")?,
        })
    }
}

/// Success envelope for `POST /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Store-assigned id of the new question.
    pub created: i64,
    /// Text of the new question.
    pub question_created: String,
    /// The requested page of the updated question list.
    pub questions: Vec<Question>,
    /// Number of questions after the insertion.
    pub total_questions: usize,
}

/// Request body for `POST /questions/search`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Term matched case-insensitively against question text. May be the
    /// empty string (matches everything) but must be present.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Success envelope for `POST /questions/search`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The requested page of matching questions.
    pub questions: Vec<Question>,
    /// Id-to-label mapping of the categories represented among all matches,
    /// not just the current page.
    #[schema(value_type = Object)]
    pub current_category: BTreeMap<i64, String>,
    /// Total number of questions in the store, not the match count.
    pub total_questions: usize,
}

/// List all questions, paginated, with category context.
#[utoipa::path(
    get,
    path = "/questions",
    params(("page" = Option<String>, Query, description = "1-based page number, defaults to 1")),
    responses(
        (status = 200, description = "A page of questions", body = QuestionListResponse),
        (status = 404, description = "No questions, or page out of range", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let questions = state.questions.list_all().await.map_err(store_not_found)?;
    if questions.is_empty() {
        return Err(Error::from(ErrorCode::NotFound));
    }

    let page = page_slice(&questions, query.page_number());
    if page.is_empty() {
        return Err(Error::from(ErrorCode::NotFound));
    }

    let categories = state.categories.list_all().await.map_err(store_not_found)?;
    let mapping = category_map(&categories);
    let current_categories = page_category_labels(page, &mapping);

    Ok(web::Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions: page.to_vec(),
        current_categories,
        categories: mapping,
    }))
}

/// Display labels for the distinct category ids on a page, in order of
/// first appearance.
fn page_category_labels(page: &[Question], mapping: &BTreeMap<i64, String>) -> Vec<String> {
    let mut seen_ids: Vec<i64> = Vec::new();
    for question in page {
        if !seen_ids.contains(&question.category) {
            seen_ids.push(question.category);
        }
    }
    seen_ids
        .into_iter()
        .filter_map(|id| mapping.get(&id).cloned())
        .collect()
}

/// Delete one question by id and return the refreshed page.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Question removed", body = DeleteQuestionResponse),
        (status = 422, description = "No such question, or store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<DeleteQuestionResponse>> {
    let id = path.into_inner();
    let removed = state
        .questions
        .delete_by_id(id)
        .await
        .map_err(store_unprocessable)?;
    if !removed {
        // Absence reports 422, not 404, matching the established API.
        return Err(Error::unprocessable(format!(
            "question {id} does not exist"
        )));
    }

    let remaining = state
        .questions
        .list_all()
        .await
        .map_err(store_unprocessable)?;
    Ok(web::Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        questions: page_slice(&remaining, query.page_number()).to_vec(),
        total_questions: remaining.len(),
    }))
}

/// Create a question and return the refreshed page.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    params(("page" = Option<String>, Query, description = "1-based page number, defaults to 1")),
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 422, description = "Missing field, or store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequest>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<CreateQuestionResponse>> {
    let new_question = NewQuestion::try_from(payload.into_inner())?;
    let question_created = new_question.question.clone();
    let created = state
        .questions
        .insert(new_question)
        .await
        .map_err(store_unprocessable)?;

    let questions = state
        .questions
        .list_all()
        .await
        .map_err(store_unprocessable)?;
    Ok(web::Json(CreateQuestionResponse {
        success: true,
        created,
        question_created,
        questions: page_slice(&questions, query.page_number()).to_vec(),
        total_questions: questions.len(),
    }))
}

/// Search question text for a case-insensitive substring.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsRequest,
    params(("page" = Option<String>, Query, description = "1-based page number, defaults to 1")),
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponse),
        (status = 404, description = "Nothing matched", body = ErrorEnvelope),
        (status = 422, description = "Missing search term, or store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    payload: web::Json<SearchQuestionsRequest>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<SearchQuestionsResponse>> {
    let term = require_field(payload.into_inner().search_term, "searchTerm")?;
    let matches = state
        .questions
        .search(&term)
        .await
        .map_err(store_unprocessable)?;
    if matches.is_empty() {
        return Err(Error::from(ErrorCode::NotFound));
    }

    let categories = state
        .categories
        .list_all()
        .await
        .map_err(store_unprocessable)?;
    let mapping = category_map(&categories);
    let current_category: BTreeMap<i64, String> = matches
        .iter()
        .filter_map(|question| {
            mapping
                .get(&question.category)
                .map(|label| (question.category, label.clone()))
        })
        .collect();
    let total_questions = state
        .questions
        .list_all()
        .await
        .map_err(store_unprocessable)?
        .len();

    Ok(web::Json(SearchQuestionsResponse {
        success: true,
        questions: page_slice(&matches, query.page_number()).to_vec(),
        current_category,
        total_questions,
    }))
}
