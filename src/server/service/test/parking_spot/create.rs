use super::*;
use chrono::{Duration, Utc};

/// Tests registering a parking spot with unique fields.
///
/// Verifies that the service assigns an id and a current registration date and
/// stores the record.
///
/// Expected: Ok with the stored parking spot
#[tokio::test]
async fn creates_parking_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    let spot = service.create(param("A-101", "ABC1234", "101", "B")).await?;

    assert_eq!(spot.parking_spot_number, "A-101");
    assert!(Utc::now() - spot.registration_date < Duration::seconds(5));

    let stored = entity::prelude::ParkingSpot::find_by_id(spot.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a used license plate is reported before any other conflict.
///
/// Verifies the plate check wins even when the spot number and apartment/block
/// pair are also taken.
///
/// Expected: Err(AppError::Conflict(ConflictError::LicensePlateCar))
#[tokio::test]
async fn rejects_used_license_plate_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    service.create(param("A-101", "ABC1234", "101", "B")).await?;

    let result = service.create(param("A-101", "ABC1234", "101", "B")).await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::LicensePlateCar))
    ));

    Ok(())
}

/// Tests that a used parking spot number is reported.
///
/// Expected: Err(AppError::Conflict(ConflictError::ParkingSpotNumber))
#[tokio::test]
async fn rejects_used_parking_spot_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    service.create(param("A-101", "ABC1234", "101", "B")).await?;

    let result = service.create(param("A-101", "XYZ9876", "101", "B")).await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::ParkingSpotNumber))
    ));

    Ok(())
}

/// Tests that a used apartment and block pair is reported.
///
/// Expected: Err(AppError::Conflict(ConflictError::ApartmentAndBlock))
#[tokio::test]
async fn rejects_used_apartment_and_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    service.create(param("A-101", "ABC1234", "101", "B")).await?;

    let result = service.create(param("A-102", "XYZ9876", "101", "B")).await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::ApartmentAndBlock))
    ));

    let count = entity::prelude::ParkingSpot::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same apartment in another block is accepted.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_same_apartment_in_other_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    service.create(param("A-101", "ABC1234", "101", "B")).await?;

    let result = service.create(param("A-102", "XYZ9876", "101", "C")).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a registration that loses a race after passing the existence checks.
///
/// Simulates a concurrent insert by saving two records straight through the repository,
/// so the second write only fails on the unique index. The failure must map to the same
/// conflicts the pre-checks report.
///
/// Expected: Conflict(LicensePlateCar), then Conflict(ApartmentAndBlock)
#[tokio::test]
async fn maps_unique_index_violation_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingSpotRepository::new(db);
    repo.save(ParkingSpot::register(param("A-101", "ABC1234", "101", "B")))
        .await?;

    let Err(err) = repo
        .save(ParkingSpot::register(param("A-102", "ABC1234", "102", "B")))
        .await
    else {
        panic!("duplicate license plate was stored");
    };
    assert!(matches!(
        conflict_or_db_err(err),
        AppError::Conflict(ConflictError::LicensePlateCar)
    ));

    let Err(err) = repo
        .save(ParkingSpot::register(param("A-103", "XYZ9876", "101", "B")))
        .await
    else {
        panic!("duplicate apartment and block was stored");
    };
    assert!(matches!(
        conflict_or_db_err(err),
        AppError::Conflict(ConflictError::ApartmentAndBlock)
    ));

    let count = entity::prelude::ParkingSpot::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
