use super::*;

/// Tests finding a stored parking spot by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_parking_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_parking_spot(db).await?;

    let repo = ParkingSpotRepository::new(db);
    let result = repo.find_by_id(stored.id).await?;

    assert!(result.is_some());
    let spot = result.unwrap();
    assert_eq!(spot.id, stored.id);
    assert_eq!(spot.license_plate_car, stored.license_plate_car);
    assert_eq!(spot.registration_date, stored.registration_date);

    Ok(())
}

/// Tests finding a parking spot with an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_parking_spot(db).await?;

    let repo = ParkingSpotRepository::new(db);
    let result = repo.find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
