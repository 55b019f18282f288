use super::*;

/// Tests fetching a user by id.
///
/// Expected: Ok(Some) with username and roles
#[tokio::test]
async fn returns_user_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user(db, "reader", "secret").await?;

    let service = UserService::new(db);
    let user = service.get_by_id(stored.id).await?.unwrap();

    assert_eq!(user.username, "reader");
    assert_eq!(user.roles, vec![Role::User]);

    Ok(())
}

/// Tests fetching an unknown user id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(service.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
