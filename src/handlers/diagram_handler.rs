use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{CreateDiagramRequest, PaginationParams},
};

#[post("/api/diagrams/create")]
async fn create_diagram(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CreateDiagramRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .diagram_service
        .create_diagram(request.into_inner())
        .await?;

    log::info!(
        "[{}] Created diagram {} in {} attempt(s)",
        get_request_id(&req).unwrap_or_default(),
        response.id,
        response.attempts
    );
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/diagrams")]
async fn list_diagrams(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let response = state
        .diagram_service
        .list_diagrams(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/diagrams/{id}")]
async fn get_diagram(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let diagram = state.diagram_service.get_diagram(&id).await?;
    Ok(HttpResponse::Ok().json(diagram))
}
