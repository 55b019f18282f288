use super::*;

/// Tests that an update keeps the id and registration date.
///
/// The body carries a different id and registration date, both of which are ignored;
/// every mutable field takes the new value.
///
/// Expected: 200 with the original identity and the new fields
#[tokio::test]
async fn preserves_id_and_registration_date() -> Result<(), AppError> {
    let app = TestApp::new().await?;
    let created = create_spot(&app, spot_body("A-101", "ABC1234", "101", "B")).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut body = spot_body("B-202", "XYZ9876", "202", "C");
    body["id"] = json!(Uuid::new_v4());
    body["registrationDate"] = json!("2000-01-01T00:00:00Z");

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/parking-spot/{}", id),
            Some(ADMIN),
            Some(body),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = response.json();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["registrationDate"], created["registrationDate"]);
    assert_eq!(updated["parkingSpotNumber"], "B-202");
    assert_eq!(updated["licensePlateCar"], "XYZ9876");
    assert_eq!(updated["block"], "C");

    Ok(())
}

/// Tests updating an unknown id.
///
/// Expected: 404 with the update specific message
#[tokio::test]
async fn returns_not_found_message() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/parking-spot/{}", Uuid::new_v4()),
            Some(ADMIN),
            Some(spot_body("A-101", "ABC1234", "101", "B")),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Parking Spot not found.");

    Ok(())
}

/// Tests taking another record's parking spot number on update.
///
/// Expected: 409 from the unique index
#[tokio::test]
async fn rejects_collision_with_other_record() -> Result<(), AppError> {
    let app = TestApp::new().await?;
    create_spot(&app, spot_body("A-101", "ABC1234", "101", "B")).await;
    let other = create_spot(&app, spot_body("A-102", "XYZ9876", "102", "B")).await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/parking-spot/{}", other["id"].as_str().unwrap()),
            Some(ADMIN),
            Some(spot_body("A-101", "XYZ9876", "102", "B")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body, "Conflict: Parking Spot is already in use!");

    Ok(())
}
