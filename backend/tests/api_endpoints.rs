//! End-to-end exercises of the assembled application: every route, the
//! failure envelopes and the quiz-round guarantees.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test as actix_test, web};
use serde_json::{Value, json};
use std::sync::Arc;

use trivia_backend::inbound::http::state::HttpState;
use trivia_backend::outbound::persistence::InMemoryStore;
use trivia_backend::server::build_app;

async fn seeded_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let state = web::Data::new(HttpState::from_store(Arc::new(
        InMemoryStore::with_trivia_seed(),
    )));
    actix_test::init_service(build_app(state)).await
}

async fn call<S, B>(app: &S, request: Request) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status().as_u16();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}

#[actix_web::test]
async fn categories_lists_the_full_mapping() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::get().uri("/categories").to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["total_categories"], 6);
    assert_eq!(
        body["categories"],
        json!({
            "1": "Science",
            "2": "Art",
            "3": "Geography",
            "4": "History",
            "5": "Entertainment",
            "6": "Sports",
        })
    );
}

#[actix_web::test]
async fn question_pages_split_nineteen_rows_ten_and_nine() {
    let app = seeded_app().await;

    let request = actix_test::TestRequest::get().uri("/questions").to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(question_ids(&body).len(), 10);
    assert_eq!(body["total_questions"], 19);

    let request = actix_test::TestRequest::get()
        .uri("/questions?page=2")
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(question_ids(&body), vec![15, 16, 17, 18, 19, 20, 21, 22, 23]);
    assert_eq!(body["total_questions"], 19);
}

#[actix_web::test]
async fn page_past_the_end_reports_not_found() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::get()
        .uri("/questions?page=1000")
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({ "success": false, "error": 404, "message": "Not found" })
    );
}

#[actix_web::test]
async fn deletion_is_observable_in_later_listings() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::delete()
        .uri("/questions/2")
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(body["deleted"], 2);
    assert_eq!(body["total_questions"], 18);

    let request = actix_test::TestRequest::get().uri("/questions").to_request();
    let (_, body) = call(&app, request).await;
    assert!(!question_ids(&body).contains(&2));
    assert_eq!(body["total_questions"], 18);
}

#[actix_web::test]
async fn deleting_a_missing_question_is_unprocessable() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::delete()
        .uri("/questions/4242")
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 422);
    assert_eq!(body["success"], Value::Bool(false));
}

#[actix_web::test]
async fn created_questions_are_listed_and_searchable() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/questions")
        .set_json(json!({
            "question": "Which chess opening begins 1.e4 e5 2.Nf3 Nc6 3.Bb5?",
            "answer": "The Ruy Lopez",
            "category": 6,
            "difficulty": 3,
        }))
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(body["created"], 24);
    assert_eq!(body["total_questions"], 20);

    let request = actix_test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({ "searchTerm": "chess opening" }))
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(question_ids(&body), vec![24]);
}

#[actix_web::test]
async fn creation_with_missing_fields_changes_nothing() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/questions")
        .set_json(json!({ "question": "incomplete", "answer": null }))
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 422);
    assert_eq!(body["error"], 422);

    let request = actix_test::TestRequest::get().uri("/questions").to_request();
    let (_, body) = call(&app, request).await;
    assert_eq!(body["total_questions"], 19);
}

#[actix_web::test]
async fn search_ignores_case() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({ "searchTerm": "WORLD CUP" }))
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 200);
    assert_eq!(question_ids(&body), vec![10, 11]);
    assert_eq!(body["current_category"], json!({ "6": "Sports" }));
}

#[actix_web::test]
async fn category_listing_returns_only_its_questions() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::get()
        .uri("/categories/2/questions")
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 200);
    assert_eq!(question_ids(&body), vec![16, 17, 18]);
    assert_eq!(body["current_category"], "Art");
    assert_eq!(body["question_in_category"], 3);
    assert_eq!(body["total_questions"], 19);
}

#[actix_web::test]
async fn unknown_category_reports_not_found() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::get()
        .uri("/categories/77/questions")
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], "Not found");
}

#[actix_web::test]
async fn quiz_round_walks_a_category_without_repeats() {
    let app = seeded_app().await;
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..3 {
        let request = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": previous,
                "quiz_category": { "id": 2 },
            }))
            .to_request();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, 200);
        let id = body["question_id"].as_i64().expect("fresh question");
        assert!(!previous.contains(&id));
        assert!([16, 17, 18].contains(&id));
        previous.push(id);
    }

    let request = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": previous,
            "quiz_category": { "id": 2 },
        }))
        .to_request();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["question_id"], Value::Null);
    assert_eq!(body["question"], Value::Null);
}

#[actix_web::test]
async fn quiz_with_two_art_questions_seen_always_draws_the_third() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": [16, 17],
            "quiz_category": { "id": 2 },
        }))
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 200);
    assert_eq!(body["question_id"], 18);
    assert_eq!(body["question"]["category"], 2);
}

#[actix_web::test]
async fn quiz_category_zero_spans_the_whole_bank() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": [],
            "quiz_category": { "id": 0 },
        }))
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 200);
    assert!(body["question_id"].as_i64().is_some());
}

#[actix_web::test]
async fn quiz_without_a_category_is_a_bad_request() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({ "previous_questions": [] }))
        .to_request();
    let (status, body) = call(&app, request).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], 400);
}

#[actix_web::test]
async fn every_response_carries_a_trace_header() {
    let app = seeded_app().await;
    let request = actix_test::TestRequest::get().uri("/categories").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.headers().contains_key("trace-id"));
}
