use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BasicCredentials, Permission},
    model::user::Role,
};
use axum::http::{header, HeaderMap, HeaderValue};
use base64::{engine::general_purpose, Engine as _};
use test_utils::{builder::TestBuilder, factory};

mod credentials;
mod require;

/// Builds request headers carrying basic credentials.
fn basic_auth(username: &str, password: &str) -> HeaderMap {
    let encoded = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
    );
    headers
}
