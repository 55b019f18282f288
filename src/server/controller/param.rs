use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, model::pagination::PageRequest};

/// Paging and sorting query parameters for list endpoints.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-indexed page number (default: 0)
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 2000)
    pub size: Option<u64>,
    /// Sort as `field` or `field,asc|desc` (default: `id,desc`)
    #[param(example = "registrationDate,desc")]
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page, self.size, self.sort.as_deref())
    }
}

/// Unwraps a JSON body, reporting any rejection as 400 Bad Request.
///
/// Axum answers type mismatches with 422 and a plain text body; this keeps every malformed
/// payload on the same status and JSON error shape.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
