//! Route level role requirements.
//!
//! Every protected route is listed once in `ROUTE_ACCESS` with its method, its path
//! template as registered on the router, and the permissions a caller needs. The
//! `enforce_route_access` middleware is installed with `Router::route_layer` so it runs
//! after routing and before the handler. Routes missing from the table still require a
//! valid login.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::Role,
    state::AppState,
};

pub const PARKING_SPOT_PATH: &str = "/api/v1/parking-spot";
pub const PARKING_SPOT_ID_PATH: &str = "/api/v1/parking-spot/{id}";
pub const USER_ID_PATH: &str = "/user/{id}";

const ADMIN: &[Permission] = &[Permission::AnyRole(&[Role::Admin])];
const ADMIN_OR_USER: &[Permission] = &[Permission::AnyRole(&[Role::Admin, Role::User])];

pub struct RouteAccess {
    pub method: Method,
    pub path: &'static str,
    pub permissions: &'static [Permission],
}

pub static ROUTE_ACCESS: [RouteAccess; 6] = [
    RouteAccess {
        method: Method::POST,
        path: PARKING_SPOT_PATH,
        permissions: ADMIN,
    },
    RouteAccess {
        method: Method::GET,
        path: PARKING_SPOT_PATH,
        permissions: ADMIN_OR_USER,
    },
    RouteAccess {
        method: Method::GET,
        path: PARKING_SPOT_ID_PATH,
        permissions: ADMIN_OR_USER,
    },
    RouteAccess {
        method: Method::PUT,
        path: PARKING_SPOT_ID_PATH,
        permissions: ADMIN,
    },
    RouteAccess {
        method: Method::DELETE,
        path: PARKING_SPOT_ID_PATH,
        permissions: ADMIN,
    },
    RouteAccess {
        method: Method::GET,
        path: USER_ID_PATH,
        permissions: ADMIN,
    },
];

/// Looks up the permissions for a method and matched path template.
///
/// Unlisted routes get an empty permission list, which still requires authentication.
pub fn permissions_for(method: &Method, path: &str) -> &'static [Permission] {
    ROUTE_ACCESS
        .iter()
        .find(|access| access.method == *method && access.path == path)
        .map(|access| access.permissions)
        .unwrap_or(&[])
}

/// Authenticates the caller and enforces the route's role requirements.
///
/// Rejections are returned before the handler runs: 401 for credential problems,
/// 403 for missing roles.
pub async fn enforce_route_access(
    State(state): State<AppState>,
    method: Method,
    matched_path: MatchedPath,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let permissions = permissions_for(&method, matched_path.as_str());

    let user = AuthGuard::new(&state.db, &headers)
        .require(permissions)
        .await?;

    tracing::debug!(
        "User '{}' authorized for {} {}",
        user.username,
        method,
        matched_path.as_str()
    );

    Ok(next.run(request).await)
}
