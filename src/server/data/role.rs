use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a role by name, inserting it first if it doesn't exist yet.
    pub async fn find_or_create(&self, name: &str) -> Result<entity::role::Model, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        entity::role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(self.db)
        .await
    }

    /// Gets every role assigned to a user, ordered by name.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose roles to load
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Assigned roles, empty when the user has none
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<entity::role::Model>, DbErr> {
        let role_ids: Vec<Uuid> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user_role| user_role.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await
    }

    /// Assigns a role to a user.
    pub async fn assign(&self, user_id: Uuid, role_id: Uuid) -> Result<(), DbErr> {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
