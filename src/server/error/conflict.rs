use thiserror::Error;

/// A parking spot write that would break one of the uniqueness rules.
///
/// The `Display` output of each variant is the exact body returned to the client.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Conflict: License Plate Car is already in use!")]
    LicensePlateCar,

    #[error("Conflict: Parking Spot is already in use!")]
    ParkingSpotNumber,

    #[error("Conflict: Parking Spot already registered for this apartment and block!")]
    ApartmentAndBlock,
}

impl ConflictError {
    /// Resolves which rule a database unique constraint violation broke.
    ///
    /// Matches on the column or index name the driver reports, which covers both the
    /// SQLite (`parking_spot.license_plate_car`) and PostgreSQL
    /// (`parking_spot_license_plate_car_key`) message formats.
    ///
    /// # Returns
    /// - `Some(ConflictError)` - The violated rule
    /// - `None` - The violation isn't one of the parking spot rules
    pub fn from_constraint(detail: &str) -> Option<Self> {
        if detail.contains("license_plate_car") {
            Some(Self::LicensePlateCar)
        } else if detail.contains("parking_spot_number") {
            Some(Self::ParkingSpotNumber)
        } else if detail.contains("apartment") {
            Some(Self::ApartmentAndBlock)
        } else {
            None
        }
    }
}
