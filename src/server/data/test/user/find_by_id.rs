use super::*;

/// Tests finding a user by id with roles loaded.
///
/// Expected: Ok(Some) with the admin and user roles
#[tokio::test]
async fn finds_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db, "admin", "secret").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(admin.id).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.username, "admin");
    assert!(user.has_role(Role::Admin));
    assert!(user.has_role(Role::User));

    Ok(())
}

/// Tests finding a user with an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "reader", "secret").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
