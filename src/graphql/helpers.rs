use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::PaginationParams,
};

/// Record ids are UUID strings; anything else cannot exist.
pub fn parse_id(id: &str) -> AppResult<String> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| AppError::ValidationError("Invalid UUID format".to_string()))
}

/// Same clamping as the REST query string.
pub fn page_bounds(offset: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let params = PaginationParams { offset, limit };
    (params.offset(), params.limit())
}
