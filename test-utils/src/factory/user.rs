//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating users with bcrypt hashed
//! passwords and role assignments. The factory supports customization through a
//! builder pattern.

use crate::factory::{
    helpers::next_id,
    role::{find_or_create_role, ROLE_ADMIN, ROLE_USER},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Cheapest cost bcrypt accepts.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// Passwords are hashed with the minimum bcrypt cost to keep tests fast.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("admin")
///     .password("secret")
///     .roles(&["ROLE_ADMIN", "ROLE_USER"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    roles: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - password: `"password"`
    /// - roles: `ROLE_USER`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password: "password".to_string(),
            roles: vec![ROLE_USER.to_string()],
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plain text password, hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Replaces the role names assigned to the user.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Builds and inserts the user entity and its role assignments.
    ///
    /// Missing roles are created on the fly.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or the password failed to hash
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(hash),
        }
        .insert(self.db)
        .await?;

        for name in &self.roles {
            let role = find_or_create_role(self.db, name).await?;
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role_id: ActiveValue::Set(role.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user holding only `ROLE_USER`.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .username(username)
        .password(password)
        .build()
        .await
}

/// Creates a user holding both `ROLE_ADMIN` and `ROLE_USER`.
pub async fn create_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .username(username)
        .password(password)
        .roles(&[ROLE_ADMIN, ROLE_USER])
        .build()
        .await
}
