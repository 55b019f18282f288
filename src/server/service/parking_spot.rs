use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::parking_spot::ParkingSpotRepository,
    error::{conflict::ConflictError, AppError},
    model::{
        pagination::{Page, PageRequest},
        parking_spot::{ParkingSpot, ParkingSpotParam},
    },
};

pub struct ParkingSpotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingSpotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new parking spot after checking the uniqueness rules.
    ///
    /// Rules are checked in a fixed order and the first one broken is reported: license
    /// plate, then parking spot number, then apartment and block. A concurrent insert that
    /// slips past the checks is caught by the database's unique indexes and reported the
    /// same way.
    ///
    /// # Arguments
    /// - `param` - Caller supplied fields; id and registration date are assigned here
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The stored parking spot
    /// - `Err(AppError::Conflict)` - A uniqueness rule would be broken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: ParkingSpotParam) -> Result<ParkingSpot, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        if repo
            .exists_by_license_plate_car(&param.license_plate_car)
            .await?
        {
            return Err(ConflictError::LicensePlateCar.into());
        }

        if repo
            .exists_by_parking_spot_number(&param.parking_spot_number)
            .await?
        {
            return Err(ConflictError::ParkingSpotNumber.into());
        }

        if repo
            .exists_by_apartment_and_block(&param.apartment, &param.block)
            .await?
        {
            return Err(ConflictError::ApartmentAndBlock.into());
        }

        let spot = repo
            .save(ParkingSpot::register(param))
            .await
            .map_err(conflict_or_db_err)?;

        tracing::info!(
            "Registered parking spot {} for plate {}",
            spot.parking_spot_number,
            spot.license_plate_car
        );

        Ok(spot)
    }

    /// Gets one page of parking spots
    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<ParkingSpot>, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let (spots, total) = repo.find_all(&request).await?;

        Ok(Page::new(spots, &request, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Replaces every mutable field of a parking spot.
    ///
    /// The stored id and registration date are kept. The uniqueness pre-checks are not
    /// run here; a unique index violation still surfaces as a conflict.
    ///
    /// Returns None if the parking spot doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        param: ParkingSpotParam,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let spot = repo
            .save(ParkingSpot::replace(&existing, param))
            .await
            .map_err(conflict_or_db_err)?;

        Ok(Some(spot))
    }

    /// Deletes a parking spot
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted parking spot {}", id);
        }

        Ok(deleted)
    }
}

/// Translates unique index violations on the parking spot table into conflicts.
pub(super) fn conflict_or_db_err(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if let Some(conflict) = ConflictError::from_constraint(&detail) {
            return conflict.into();
        }
    }

    err.into()
}
