//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (categories,
//!   questions, quizzes)
//! - **Schemas**: The wire types for requests, success envelopes and the
//!   uniform failure envelope
//!
//! The generated specification is served at `/api-docs/openapi.json` in
//! debug builds.

use utoipa::OpenApi;

use crate::domain::{Category, ErrorEnvelope, Question};
use crate::inbound::http::categories::{CategoryListResponse, QuestionsByCategoryResponse};
use crate::inbound::http::questions::{
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse,
    SearchQuestionsRequest, SearchQuestionsResponse,
};
use crate::inbound::http::quizzes::{QuizCategory, QuizRequest, QuizResponse};

/// OpenAPI document for the REST API.
/// Served at `/api-docs/openapi.json` in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "HTTP interface for browsing a trivia question bank and playing quiz rounds."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::list_questions_by_category,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::quizzes::play_quiz,
    ),
    components(schemas(
        Category,
        Question,
        ErrorEnvelope,
        CategoryListResponse,
        QuestionsByCategoryResponse,
        QuestionListResponse,
        CreateQuestionRequest,
        CreateQuestionResponse,
        DeleteQuestionResponse,
        SearchQuestionsRequest,
        SearchQuestionsResponse,
        QuizCategory,
        QuizRequest,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Category listings and per-category questions"),
        (name = "questions", description = "Question bank management and search"),
        (name = "quizzes", description = "Quiz-round question selection")
    )
)]
pub struct ApiDoc;
