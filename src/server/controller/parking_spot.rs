use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pagination::PageDto,
        parking_spot::{ParkingSpotDto, ParkingSpotInputDto},
    },
    server::{
        controller::param::{json_body, PageQuery},
        error::AppError,
        model::parking_spot::ParkingSpotParam,
        service::parking_spot::ParkingSpotService,
        state::AppState,
    },
};

/// Tag for grouping parking spot endpoints in OpenAPI documentation
pub static PARKING_SPOT_TAG: &str = "parking-spot";

/// Body returned when a parking spot lookup or delete finds nothing.
pub const PARKING_SPOT_NOT_FOUND: &str = "Parking Spot Not Found.";
/// Body returned when an update targets an unknown parking spot.
pub const PARKING_SPOT_NOT_FOUND_ON_UPDATE: &str = "Parking Spot not found.";
pub const PARKING_SPOT_DELETED: &str = "Parking Spot deleted successfully.";

/// Register a new parking spot.
///
/// Validates the payload, then checks the license plate, the parking spot number and the
/// apartment and block pair for conflicts in that order. The id and registration date
/// are assigned by the server.
///
/// # Access Control
/// - `ROLE_ADMIN`
///
/// # Returns
/// - `201 Created` - The stored parking spot
/// - `400 Bad Request` - Invalid or malformed payload
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Caller isn't an admin
/// - `409 Conflict` - Plain text message naming the conflicting field
#[utoipa::path(
    post,
    path = "/api/v1/parking-spot",
    tag = PARKING_SPOT_TAG,
    request_body = ParkingSpotInputDto,
    responses(
        (status = 201, description = "Parking spot registered", body = ParkingSpotDto),
        (status = 400, description = "Invalid parking spot data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller lacks ROLE_ADMIN", body = ErrorDto),
        (status = 409, description = "License plate, parking spot number, or apartment and block already in use", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn create_parking_spot(
    State(state): State<AppState>,
    payload: Result<Json<ParkingSpotInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;
    payload.validate()?;

    let service = ParkingSpotService::new(&state.db);

    let spot = service.create(ParkingSpotParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(spot.into_dto())))
}

/// Get a page of parking spots.
///
/// Defaults to the first page of 10 ordered by id descending. An empty page is a
/// successful response.
///
/// # Access Control
/// - `ROLE_ADMIN` or `ROLE_USER`
///
/// # Returns
/// - `200 OK` - Page of parking spots
/// - `400 Bad Request` - Unknown sort field or direction
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/v1/parking-spot",
    tag = PARKING_SPOT_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of parking spots", body = PageDto<ParkingSpotDto>),
        (status = 400, description = "Invalid paging or sort parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller lacks ROLE_ADMIN and ROLE_USER", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_parking_spots(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = params.into_page_request()?;

    let service = ParkingSpotService::new(&state.db);

    let page = service.get_paginated(request).await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(page.map(|spot| spot.into_dto()))),
    ))
}

/// Get a parking spot by ID.
///
/// # Access Control
/// - `ROLE_ADMIN` or `ROLE_USER`
///
/// # Returns
/// - `200 OK` - The parking spot
/// - `404 Not Found` - Plain text `Parking Spot Not Found.`
#[utoipa::path(
    get,
    path = "/api/v1/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    responses(
        (status = 200, description = "Parking spot found", body = ParkingSpotDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller lacks ROLE_ADMIN and ROLE_USER", body = ErrorDto),
        (status = 404, description = "Parking spot not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_parking_spot_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParkingSpotService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(spot) => Ok((StatusCode::OK, Json(spot.into_dto()))),
        None => Err(AppError::NotFound(PARKING_SPOT_NOT_FOUND.to_string())),
    }
}

/// Replace a parking spot's fields.
///
/// Every mutable field is overwritten with the payload; the id and registration date of
/// the stored record are kept. The create time conflict checks are not repeated, but a
/// unique index violation is still reported as a conflict.
///
/// # Access Control
/// - `ROLE_ADMIN`
///
/// # Returns
/// - `200 OK` - The updated parking spot
/// - `400 Bad Request` - Invalid or malformed payload
/// - `404 Not Found` - Plain text `Parking Spot not found.`
/// - `409 Conflict` - Unique field collides with another record
#[utoipa::path(
    put,
    path = "/api/v1/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    request_body = ParkingSpotInputDto,
    responses(
        (status = 200, description = "Parking spot updated", body = ParkingSpotDto),
        (status = 400, description = "Invalid parking spot data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller lacks ROLE_ADMIN", body = ErrorDto),
        (status = 404, description = "Parking spot not found", body = String, content_type = "text/plain"),
        (status = 409, description = "Unique field already used by another parking spot", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ParkingSpotInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;
    payload.validate()?;

    let service = ParkingSpotService::new(&state.db);

    match service
        .update(id, ParkingSpotParam::from_dto(payload))
        .await?
    {
        Some(spot) => Ok((StatusCode::OK, Json(spot.into_dto()))),
        None => Err(AppError::NotFound(
            PARKING_SPOT_NOT_FOUND_ON_UPDATE.to_string(),
        )),
    }
}

/// Delete a parking spot.
///
/// # Access Control
/// - `ROLE_ADMIN`
///
/// # Returns
/// - `200 OK` - Plain text `Parking Spot deleted successfully.`
/// - `404 Not Found` - Plain text `Parking Spot Not Found.`
#[utoipa::path(
    delete,
    path = "/api/v1/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    responses(
        (status = 200, description = "Parking spot deleted", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller lacks ROLE_ADMIN", body = ErrorDto),
        (status = 404, description = "Parking spot not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParkingSpotService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(PARKING_SPOT_NOT_FOUND.to_string()));
    }

    Ok((StatusCode::OK, PARKING_SPOT_DELETED))
}
