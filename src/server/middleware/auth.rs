use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose, Engine as _};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

pub enum Permission {
    /// Caller must hold at least one of the listed roles.
    AnyRole(&'static [Role]),
}

/// Username and password decoded from an `Authorization: Basic` header.
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decodes the `Authorization` header of a request.
    ///
    /// The scheme name is matched case-insensitively and the password may itself contain
    /// colons; only the first colon separates it from the username.
    ///
    /// # Returns
    /// - `Ok(BasicCredentials)` - Decoded username and password
    /// - `Err(AuthError::MissingCredentials)` - No `Authorization` header
    /// - `Err(AuthError::MalformedCredentials)` - Wrong scheme, bad base64 or no colon
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedCredentials("header is not ASCII".to_string()))?;

        let (scheme, encoded) = value
            .split_once(' ')
            .ok_or_else(|| AuthError::MalformedCredentials("missing scheme".to_string()))?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::MalformedCredentials(format!(
                "unsupported scheme '{}'",
                scheme
            )));
        }

        let decoded = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| AuthError::MalformedCredentials("missing ':' separator".to_string()))?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// The password is verified against the stored bcrypt hash on the blocking thread pool.
    /// An unknown username and a wrong password produce the same error.
    ///
    /// # Arguments
    /// - `permissions` - Requirements the user must satisfy; empty means any authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding the required roles
    /// - `Err(AppError::AuthErr)` - Missing, malformed or invalid credentials, or access denied
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let credentials = BasicCredentials::from_headers(self.headers)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&credentials.username).await? else {
            tracing::warn!("Login attempt for unknown user '{}'", credentials.username);
            return Err(AuthError::InvalidCredentials(credentials.username).into());
        };

        let password = credentials.password;
        let password_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;

        if !verified {
            tracing::warn!("Invalid password for user '{}'", user.username);
            return Err(AuthError::InvalidCredentials(user.username).into());
        }

        for permission in permissions {
            match permission {
                Permission::AnyRole(roles) => {
                    if !roles.iter().any(|role| user.has_role(*role)) {
                        let required: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
                        tracing::warn!(
                            "User '{}' lacks any of the roles {:?}",
                            user.username,
                            required
                        );
                        return Err(AuthError::AccessDenied(
                            user.username,
                            format!("requires one of {:?}", required),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
