use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Payload accepted by the create and update parking spot endpoints.
///
/// Missing fields deserialize to empty strings so they are reported by validation
/// alongside every other field error. Any `id` or `registrationDate` sent by the
/// client is ignored.
#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkingSpotInputDto {
    #[schema(example = "A-101", max_length = 10)]
    #[validate(
        length(max = 10, message = "must have at most 10 characters"),
        custom(function = "not_blank")
    )]
    pub parking_spot_number: String,

    #[schema(example = "ABC1234", max_length = 7)]
    #[validate(
        length(max = 7, message = "must have at most 7 characters"),
        custom(function = "not_blank")
    )]
    pub license_plate_car: String,

    #[schema(max_length = 70)]
    #[validate(
        length(max = 70, message = "must have at most 70 characters"),
        custom(function = "not_blank")
    )]
    pub brand_car: String,

    #[schema(max_length = 70)]
    #[validate(
        length(max = 70, message = "must have at most 70 characters"),
        custom(function = "not_blank")
    )]
    pub model_car: String,

    #[schema(max_length = 70)]
    #[validate(
        length(max = 70, message = "must have at most 70 characters"),
        custom(function = "not_blank")
    )]
    pub color_car: String,

    #[schema(max_length = 130)]
    #[validate(
        length(max = 130, message = "must have at most 130 characters"),
        custom(function = "not_blank")
    )]
    pub responsible_name: String,

    #[schema(example = "101", max_length = 30)]
    #[validate(
        length(max = 30, message = "must have at most 30 characters"),
        custom(function = "not_blank")
    )]
    pub apartment: String,

    #[schema(example = "B", max_length = 30)]
    #[validate(
        length(max = 30, message = "must have at most 30 characters"),
        custom(function = "not_blank")
    )]
    pub block: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// A stored parking spot as returned by the API.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDto {
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub registration_date: DateTime<Utc>,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}
