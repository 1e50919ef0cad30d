//! Category endpoints.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions?page=N
//! ```

use std::collections::BTreeMap;

use actix_web::{get, web};
use pagination::page_slice;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, ErrorEnvelope, Question, category_map};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{store_not_found, store_unprocessable};
use crate::inbound::http::query::PageQuery;
use crate::inbound::http::state::HttpState;

/// Success envelope for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Mapping of category id to display label.
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i64, String>,
    /// Number of categories in the mapping.
    pub total_categories: usize,
}

/// Success envelope for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionsByCategoryResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The requested page of matching questions.
    pub questions: Vec<Question>,
    /// Total number of questions in the store, not the match count.
    pub total_questions: usize,
    /// Number of matching questions before paging.
    pub question_in_category: usize,
    /// Display label of the requested category.
    pub current_category: String,
}

/// List all categories as an id-to-label mapping.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category mapping", body = CategoryListResponse),
        (status = 404, description = "No categories exist", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoryListResponse>> {
    let categories = state.categories.list_all().await.map_err(store_not_found)?;
    let mapping = category_map(&categories);
    if mapping.is_empty() {
        return Err(Error::from(ErrorCode::NotFound));
    }
    Ok(web::Json(CategoryListResponse {
        success: true,
        total_categories: mapping.len(),
        categories: mapping,
    }))
}

/// List the questions belonging to one category, paginated.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category id"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionsByCategoryResponse),
        (status = 404, description = "Unknown category", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listQuestionsByCategory"
)]
#[get("/categories/{id}/questions")]
pub async fn list_questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionsByCategoryResponse>> {
    let category_id = path.into_inner();
    let category = state
        .categories
        .get_by_id(category_id)
        .await
        .map_err(store_unprocessable)?
        .ok_or_else(|| Error::from(ErrorCode::NotFound))?;

    let matches = state
        .questions
        .filter_by_category(category_id)
        .await
        .map_err(store_unprocessable)?;
    let total_questions = state
        .questions
        .list_all()
        .await
        .map_err(store_unprocessable)?
        .len();

    Ok(web::Json(QuestionsByCategoryResponse {
        success: true,
        questions: page_slice(&matches, query.page_number()).to_vec(),
        total_questions,
        question_in_category: matches.len(),
        current_category: category.kind,
    }))
}
