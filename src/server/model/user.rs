//! User domain models and parameters.
//!
//! Users authenticate with HTTP basic credentials checked against a bcrypt hash
//! and carry a set of roles used for per-route authorization.

use uuid::Uuid;

use crate::model::user::UserDto;

/// Authorization label attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Every role the application knows about.
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// Name stored in the `role` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }

    /// Resolves a stored role name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// An account allowed to call the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// bcrypt hash of the password. Never leaves the server.
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl User {
    /// Converts an entity model and its role rows into the user domain model.
    ///
    /// Role names the application doesn't recognise are skipped.
    pub fn from_entity(entity: entity::user::Model, roles: Vec<entity::role::Model>) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password,
            roles: roles
                .iter()
                .filter_map(|role| Role::from_name(&role.name))
                .collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Converts the user into a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            roles: self
                .roles
                .iter()
                .map(|role| role.as_str().to_string())
                .collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    /// Already hashed password.
    pub password_hash: String,
    pub roles: Vec<Role>,
}
