use super::*;

/// Tests deleting a parking spot and fetching it afterwards.
///
/// Expected: 200 with the confirmation message, then 404
#[tokio::test]
async fn deletes_then_get_returns_not_found() -> Result<(), AppError> {
    let app = TestApp::new().await?;
    let created = create_spot(&app, spot_body("A-101", "ABC1234", "101", "B")).await;
    let uri = format!("/api/v1/parking-spot/{}", created["id"].as_str().unwrap());

    let response = app.send(Method::DELETE, &uri, Some(ADMIN), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Parking Spot deleted successfully.");

    let response = app.send(Method::GET, &uri, Some(ADMIN), None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Parking Spot Not Found.");

    Ok(())
}

/// Tests deleting an unknown id.
///
/// Expected: 404 with the not found message
#[tokio::test]
async fn returns_not_found_message() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    let response = app
        .send(
            Method::DELETE,
            &format!("/api/v1/parking-spot/{}", Uuid::new_v4()),
            Some(ADMIN),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Parking Spot Not Found.");

    Ok(())
}
