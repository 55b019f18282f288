use super::*;

/// Tests creating a role that doesn't exist yet.
///
/// Expected: Ok with a new role row carrying the name
#[tokio::test]
async fn creates_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let role = repo.find_or_create("ROLE_ADMIN").await?;

    assert_eq!(role.name, "ROLE_ADMIN");
    assert_eq!(repo.find_by_name("ROLE_ADMIN").await?, Some(role));

    Ok(())
}

/// Tests that an existing role is reused.
///
/// Expected: Ok with the same id on both calls
#[tokio::test]
async fn reuses_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::find_or_create_role(db, "ROLE_USER").await?;

    let repo = RoleRepository::new(db);
    let role = repo.find_or_create("ROLE_USER").await?;

    assert_eq!(role.id, existing.id);

    Ok(())
}
