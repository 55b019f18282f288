use super::*;

/// Tests deleting a stored parking spot.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_parking_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_parking_spot(db).await?;
    let other = factory::create_parking_spot(db).await?;

    let repo = ParkingSpotRepository::new(db);
    let deleted = repo.delete(stored.id).await?;

    assert!(deleted);
    assert!(entity::prelude::ParkingSpot::find_by_id(stored.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::ParkingSpot::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingSpotRepository::new(db);
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
