//! Parking spot factory for creating test parking spot entities.
//!
//! This module provides factory methods for creating parking spot entities with
//! defaults that never collide on the table's unique columns. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test parking spots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_spot::ParkingSpotFactory;
///
/// let spot = ParkingSpotFactory::new(&db)
///     .parking_spot_number("A-101")
///     .license_plate_car("ABC1234")
///     .build()
///     .await?;
/// ```
pub struct ParkingSpotFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    parking_spot_number: String,
    license_plate_car: String,
    brand_car: String,
    model_car: String,
    color_car: String,
    registration_date: DateTime<Utc>,
    responsible_name: String,
    apartment: String,
    block: String,
}

impl<'a> ParkingSpotFactory<'a> {
    /// Creates a new ParkingSpotFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - parking_spot_number: `"S-{id}"`
    /// - license_plate_car: `"T{id:06}"`
    /// - brand_car / model_car / color_car: `"Brand"`, `"Model"`, `"Black"`
    /// - registration_date: now
    /// - responsible_name: `"Resident {id}"`
    /// - apartment: `"{id}"`, block: `"A"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ParkingSpotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            parking_spot_number: format!("S-{}", id),
            license_plate_car: format!("T{:06}", id % 1_000_000),
            brand_car: "Brand".to_string(),
            model_car: "Model".to_string(),
            color_car: "Black".to_string(),
            registration_date: Utc::now(),
            responsible_name: format!("Resident {}", id),
            apartment: id.to_string(),
            block: "A".to_string(),
        }
    }

    /// Sets the primary key of the parking spot.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the parking spot number.
    pub fn parking_spot_number(mut self, number: impl Into<String>) -> Self {
        self.parking_spot_number = number.into();
        self
    }

    /// Sets the car license plate.
    pub fn license_plate_car(mut self, plate: impl Into<String>) -> Self {
        self.license_plate_car = plate.into();
        self
    }

    /// Sets the registration timestamp.
    pub fn registration_date(mut self, registration_date: DateTime<Utc>) -> Self {
        self.registration_date = registration_date;
        self
    }

    /// Sets the responsible resident's name.
    pub fn responsible_name(mut self, name: impl Into<String>) -> Self {
        self.responsible_name = name.into();
        self
    }

    /// Sets the apartment.
    pub fn apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = apartment.into();
        self
    }

    /// Sets the block.
    pub fn block(mut self, block: impl Into<String>) -> Self {
        self.block = block.into();
        self
    }

    /// Builds and inserts the parking spot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_spot::Model)` - Created parking spot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_spot::Model, DbErr> {
        entity::parking_spot::ActiveModel {
            id: ActiveValue::Set(self.id),
            parking_spot_number: ActiveValue::Set(self.parking_spot_number),
            license_plate_car: ActiveValue::Set(self.license_plate_car),
            brand_car: ActiveValue::Set(self.brand_car),
            model_car: ActiveValue::Set(self.model_car),
            color_car: ActiveValue::Set(self.color_car),
            registration_date: ActiveValue::Set(self.registration_date),
            responsible_name: ActiveValue::Set(self.responsible_name),
            apartment: ActiveValue::Set(self.apartment),
            block: ActiveValue::Set(self.block),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parking spot with default values.
///
/// Shorthand for `ParkingSpotFactory::new(db).build().await`.
pub async fn create_parking_spot(
    db: &DatabaseConnection,
) -> Result<entity::parking_spot::Model, DbErr> {
    ParkingSpotFactory::new(db).build().await
}

/// Creates `count` parking spots with default values.
pub async fn create_parking_spots(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::parking_spot::Model>, DbErr> {
    let mut spots = Vec::with_capacity(count);
    for _ in 0..count {
        spots.push(create_parking_spot(db).await?);
    }
    Ok(spots)
}
