//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};

use crate::domain::Error;
use crate::inbound::http::categories::{list_categories, list_questions_by_category};
use crate::inbound::http::questions::{
    create_question, delete_question, list_questions, search_questions,
};
use crate::inbound::http::quizzes::play_quiz;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;

fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(["GET", "PUT", "POST", "DELETE", "OPTIONS"])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn json_config() -> web::JsonConfig {
    // Undecodable bodies report the uniform envelope rather than the
    // actix default text response.
    web::JsonConfig::default().error_handler(|err, _req| Error::bad_request(err.to_string()).into())
}

/// Assemble the application with every route, the CORS policy and the
/// tracing middleware. Shared between the server and the integration tests.
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(cors_policy())
        .wrap(Trace)
        .service(list_categories)
        .service(list_questions_by_category)
        .service(list_questions)
        .service(create_question)
        .service(delete_question)
        .service(search_questions)
        .service(play_quiz);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async {
            web::Json(ApiDoc::openapi())
        }),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server over the provided state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    http_state: web::Data<HttpState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let mut server = HttpServer::new(move || build_app(http_state.clone()));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    Ok(server.bind(config.bind_addr)?.run())
}
