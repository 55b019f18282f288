use super::*;

/// Tests an admin passing an admin-only permission check.
///
/// Verifies that the AuthGuard grants access when the credentials match a stored user
/// holding the admin role.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "admin", "secret").await?;

    let headers = basic_auth("admin", "secret");
    let auth_guard = AuthGuard::new(db, &headers);
    let user = auth_guard
        .require(&[Permission::AnyRole(&[Role::Admin])])
        .await?;

    assert_eq!(user.username, "admin");
    assert!(user.has_role(Role::Admin));

    Ok(())
}

/// Tests a plain user passing a check that accepts either role.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_when_any_role_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "reader", "secret").await?;

    let headers = basic_auth("reader", "secret");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::AnyRole(&[Role::Admin, Role::User])])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a plain user denied an admin-only permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "reader", "secret").await?;

    let headers = basic_auth("reader", "secret");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::AnyRole(&[Role::Admin])])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(username, message))) => {
            assert_eq!(username, "reader");
            assert!(message.contains("ROLE_ADMIN"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "admin", "secret").await?;

    let headers = basic_auth("admin", "wrong");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests an unknown username.
///
/// Expected: Err(AuthError::InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = basic_auth("ghost", "secret");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests that authentication is checked before any permission.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_request_without_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::AnyRole(&[Role::Admin])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}
