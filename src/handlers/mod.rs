pub mod diagram_handler;
pub mod flashcard_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod transcript_handler;

use actix_web::web;

use crate::errors::AppError;

const MAX_JSON_BODY_BYTES: usize = 1 << 20;

/// Registers every REST, health and GraphQL route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(health_handler::health_check_live)
        .service(flashcard_handler::create_flashcards)
        .service(flashcard_handler::list_flashcards)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::create_quiz_batch)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz)
        .service(diagram_handler::create_diagram)
        .service(diagram_handler::list_diagrams)
        .service(diagram_handler::get_diagram)
        .service(transcript_handler::fetch_captions)
        .service(transcript_handler::get_transcript)
        .service(graphql_handler::graphql)
        .service(graphql_handler::graphiql);
}

/// Malformed or missing JSON bodies are reported like any other validation error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| AppError::ValidationError(format!("Invalid request body: {}", err)).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(format!("Invalid query string: {}", err)).into())
}
