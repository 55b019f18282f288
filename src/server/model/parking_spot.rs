//! Parking spot domain model and parameters.
//!
//! Construction is explicit in both directions so that `id` and `registration_date`
//! can only come from the server: `ParkingSpot::register` assigns them for a new
//! record and `ParkingSpot::replace` carries them over from the stored one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::parking_spot::{ParkingSpotDto, ParkingSpotInputDto};

/// A parking spot reserved for a resident's car.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    /// Server assigned identifier, immutable after creation.
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    /// Set once at creation, never changed by updates.
    pub registration_date: DateTime<Utc>,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

impl ParkingSpot {
    /// Builds a new record from caller input, assigning a fresh id and the current UTC time.
    pub fn register(param: ParkingSpotParam) -> Self {
        Self::from_parts(Uuid::new_v4(), Utc::now(), param)
    }

    /// Builds the replacement for `existing`, keeping its id and registration date.
    ///
    /// Every other field is taken from `param` wholesale.
    pub fn replace(existing: &ParkingSpot, param: ParkingSpotParam) -> Self {
        Self::from_parts(existing.id, existing.registration_date, param)
    }

    fn from_parts(id: Uuid, registration_date: DateTime<Utc>, param: ParkingSpotParam) -> Self {
        Self {
            id,
            parking_spot_number: param.parking_spot_number,
            license_plate_car: param.license_plate_car,
            brand_car: param.brand_car,
            model_car: param.model_car,
            color_car: param.color_car,
            registration_date,
            responsible_name: param.responsible_name,
            apartment: param.apartment,
            block: param.block,
        }
    }

    /// Converts an entity model to the parking spot domain model.
    pub fn from_entity(entity: entity::parking_spot::Model) -> Self {
        Self {
            id: entity.id,
            parking_spot_number: entity.parking_spot_number,
            license_plate_car: entity.license_plate_car,
            brand_car: entity.brand_car,
            model_car: entity.model_car,
            color_car: entity.color_car,
            registration_date: entity.registration_date,
            responsible_name: entity.responsible_name,
            apartment: entity.apartment,
            block: entity.block,
        }
    }

    /// Converts the domain model into a DTO for API responses.
    pub fn into_dto(self) -> ParkingSpotDto {
        ParkingSpotDto {
            id: self.id,
            parking_spot_number: self.parking_spot_number,
            license_plate_car: self.license_plate_car,
            brand_car: self.brand_car,
            model_car: self.model_car,
            color_car: self.color_car,
            registration_date: self.registration_date,
            responsible_name: self.responsible_name,
            apartment: self.apartment,
            block: self.block,
        }
    }
}

/// Caller supplied, mutable fields of a parking spot.
///
/// Used for both create and update; never carries `id` or `registration_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpotParam {
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

impl ParkingSpotParam {
    /// Converts a validated request DTO into parameters for the service layer.
    pub fn from_dto(dto: ParkingSpotInputDto) -> Self {
        Self {
            parking_spot_number: dto.parking_spot_number,
            license_plate_car: dto.license_plate_car,
            brand_car: dto.brand_car,
            model_car: dto.model_car,
            color_car: dto.color_car,
            responsible_name: dto.responsible_name,
            apartment: dto.apartment,
            block: dto.block,
        }
    }
}
