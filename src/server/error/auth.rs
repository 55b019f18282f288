use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Challenge sent with every 401 so clients know to retry with basic credentials.
pub const WWW_AUTHENTICATE_CHALLENGE: &str = "Basic realm=\"parking-control\"";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Request is missing basic authentication credentials")]
    MissingCredentials,

    /// `Authorization` header is present but isn't a decodable `Basic user:password` value.
    #[error("Malformed basic authentication credentials: {0}")]
    MalformedCredentials(String),

    /// Username is unknown or the password doesn't match its stored hash.
    ///
    /// Both cases share this variant so responses don't reveal which usernames exist.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),

    /// Authenticated user lacks a role the route requires.
    ///
    /// # Fields
    /// - Username of the caller
    /// - Description of the denied access, logged server-side only
    #[error("User '{0}' denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential problems produce 401 Unauthorized with a `WWW-Authenticate: Basic` challenge,
/// while a missing role produces 403 Forbidden. Client-facing messages stay generic; the
/// detailed reason is only present in the error's `Display` output for logging.
///
/// # Returns
/// - 401 Unauthorized - For missing, malformed, or invalid credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials
            | Self::MalformedCredentials(_)
            | Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, WWW_AUTHENTICATE_CHALLENGE)],
                Json(ErrorDto {
                    error: "Full authentication is required to access this resource".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
