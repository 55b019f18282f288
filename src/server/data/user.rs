use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    data::role::RoleRepository,
    model::user::{CreateUserParam, User},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID, with roles loaded.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.with_roles(user).await.map(Some)
    }

    /// Finds a user by login name, with roles loaded.
    ///
    /// Usernames are matched exactly; the lookup is case sensitive.
    ///
    /// # Arguments
    /// - `username` - Login name from the request credentials
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User exists
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.with_roles(user).await.map(Some)
    }

    /// Creates a user and assigns its roles, creating missing role rows on the fly.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let role_repo = RoleRepository::new(self.db);

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password_hash),
        }
        .insert(self.db)
        .await?;

        for role in &param.roles {
            let role = role_repo.find_or_create(role.as_str()).await?;
            role_repo.assign(user.id, role.id).await?;
        }

        self.with_roles(user).await
    }

    async fn with_roles(&self, user: entity::user::Model) -> Result<User, DbErr> {
        let roles = RoleRepository::new(self.db).find_by_user(user.id).await?;

        Ok(User::from_entity(user, roles))
    }
}
