use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{CreateFlashcardsRequest, PaginationParams},
};

#[post("/api/cards/create")]
async fn create_flashcards(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CreateFlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .flashcard_service
        .create_flashcards(request.into_inner())
        .await?;

    log::info!(
        "[{}] Created {} flashcards",
        get_request_id(&req).unwrap_or_default(),
        response.accepted
    );
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/cards")]
async fn list_flashcards(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let response = state
        .flashcard_service
        .list_flashcards(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
