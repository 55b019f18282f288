//! Role factory for creating test role entities.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

/// Role name granting administrative access.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Role name granting read access.
pub const ROLE_USER: &str = "ROLE_USER";

/// Returns the role with the given name, inserting it first if it doesn't exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Role name such as `ROLE_ADMIN`
///
/// # Returns
/// - `Ok(entity::role::Model)` - Existing or newly created role
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}
