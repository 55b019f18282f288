use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by ID with its roles
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.find_by_id(id).await?)
    }

    /// Creates a user with the given roles unless the username is already taken.
    ///
    /// The password is hashed with bcrypt on the blocking thread pool. An existing user is
    /// left untouched, including its password and roles.
    ///
    /// # Arguments
    /// - `username` - Login name for the account
    /// - `password` - Plain text password, hashed before storage
    /// - `roles` - Roles to assign when the account is created
    /// - `cost` - bcrypt cost factor
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account was created
    /// - `Ok(None)` - Username already exists
    /// - `Err(AppError)` - Hashing or database error
    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
        roles: &[Role],
        cost: u32,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Ok(None);
        }

        let password = password.to_string();
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        let user = user_repo
            .create(CreateUserParam {
                username: username.to_string(),
                password_hash,
                roles: roles.to_vec(),
            })
            .await?;

        Ok(Some(user))
    }
}
