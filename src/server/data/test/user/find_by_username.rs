use super::*;

/// Tests finding a user by login name.
///
/// Verifies the stored bcrypt hash is returned so credentials can be checked.
///
/// Expected: Ok(Some) with only the user role
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "reader", "secret").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("reader").await?.unwrap();

    assert_eq!(user.roles, vec![Role::User]);
    assert!(bcrypt::verify("secret", &user.password_hash).unwrap());

    Ok(())
}

/// Tests that username lookup is exact.
///
/// Expected: Ok(None) for a differently cased name
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "reader", "secret").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("Reader").await?.is_none());
    assert!(repo.find_by_username("writer").await?.is_none());

    Ok(())
}
