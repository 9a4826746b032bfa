use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuizBatchRequest, CreateQuizRequest, PaginationParams},
};

#[post("/api/quiz/create")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/quiz/batch")]
async fn create_quiz_batch(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizBatchRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .create_quiz_batch(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quiz")]
async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let response = state
        .quiz_service
        .list_quizzes(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        fixtures::{test_quiz_question, SINGLE_QUIZ_REPLY},
        test_helpers::mock_state,
    };
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_quiz_spreads_answers() {
        let state = mock_state(|mocks| {
            mocks
                .text_generator
                .expect_generate()
                .returning(|_| Ok(SINGLE_QUIZ_REPLY.to_string()));
            mocks.quiz_repository.expect_create().returning(|q| Ok(q));
        });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/create")
            .set_json(serde_json::json!({ "input_text": "France is in Europe." }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["question"], "What is the capital of France?");
        assert_eq!(body["answer1"], "Paris");
        assert_eq!(body["answer4"], "Rome");
        assert_eq!(body["answer_ordering"], "model_claimed_first");
    }

    #[actix_web::test]
    async fn test_create_quiz_batch_reports_counts() {
        let state = mock_state(|mocks| {
            mocks.text_generator.expect_generate().returning(|_| {
                Ok("Question: Capital of France?\na) Paris\nb) London\nc) Berlin\nd) Rome".to_string())
            });
            mocks
                .quiz_repository
                .expect_create_many()
                .returning(|q| Ok(q));
        });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_quiz_batch),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/batch")
            .set_json(serde_json::json!({ "input_text": "Geography.", "question_count": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["accepted"], 1);
        assert_eq!(body["questions"][0]["answer_ordering"], "unverified");
    }

    #[actix_web::test]
    async fn test_get_quiz_by_id() {
        let question = test_quiz_question();
        let id = question.id.clone();
        let state = mock_state(move |mocks| {
            mocks
                .quiz_repository
                .expect_find_by_id()
                .returning(move |_| Ok(Some(question.clone())));
        });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_quiz),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/quiz/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], id);
    }

    #[actix_web::test]
    async fn test_get_missing_quiz_is_not_found() {
        let state = mock_state(|mocks| {
            mocks.quiz_repository.expect_find_by_id().returning(|_| Ok(None));
        });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_quiz),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/quiz/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
