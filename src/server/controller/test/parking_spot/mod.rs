use super::*;
use uuid::Uuid;

mod delete;
mod update;

/// Creates a parking spot through the API as the admin and returns its JSON.
async fn create_spot(app: &TestApp, body: Value) -> Value {
    let response = app
        .send(Method::POST, "/api/v1/parking-spot", Some(ADMIN), Some(body))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.json()
}
