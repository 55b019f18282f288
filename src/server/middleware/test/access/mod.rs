use crate::server::{
    middleware::{
        access::{permissions_for, PARKING_SPOT_ID_PATH, PARKING_SPOT_PATH, USER_ID_PATH},
        auth::Permission,
    },
    model::user::Role,
};
use axum::http::Method;

fn roles(permissions: &[Permission]) -> Vec<Role> {
    permissions
        .iter()
        .flat_map(|permission| match permission {
            Permission::AnyRole(roles) => roles.to_vec(),
        })
        .collect()
}

/// Tests that every write route is admin only.
///
/// Expected: only ROLE_ADMIN for create, update, delete and the user lookup
#[test]
fn write_routes_require_admin() {
    let cases = [
        (Method::POST, PARKING_SPOT_PATH),
        (Method::PUT, PARKING_SPOT_ID_PATH),
        (Method::DELETE, PARKING_SPOT_ID_PATH),
        (Method::GET, USER_ID_PATH),
    ];

    for (method, path) in cases {
        assert_eq!(roles(permissions_for(&method, path)), vec![Role::Admin]);
    }
}

/// Tests that read routes accept either role.
///
/// Expected: ROLE_ADMIN and ROLE_USER for list and get
#[test]
fn read_routes_accept_admin_or_user() {
    for path in [PARKING_SPOT_PATH, PARKING_SPOT_ID_PATH] {
        assert_eq!(
            roles(permissions_for(&Method::GET, path)),
            vec![Role::Admin, Role::User]
        );
    }
}

/// Tests an unlisted route.
///
/// Expected: empty permissions, authentication only
#[test]
fn unlisted_routes_only_require_login() {
    assert!(permissions_for(&Method::PATCH, PARKING_SPOT_ID_PATH).is_empty());
}
