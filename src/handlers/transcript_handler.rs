use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::FetchCaptionsRequest};

#[post("/api/youtube/captions")]
async fn fetch_captions(
    state: web::Data<AppState>,
    request: web::Json<FetchCaptionsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .transcript_service
        .fetch_captions(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/youtube/captions/{id}")]
async fn get_transcript(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transcript = state.transcript_service.get_transcript(&id).await?;
    Ok(HttpResponse::Ok().json(transcript))
}
