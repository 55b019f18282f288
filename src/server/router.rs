use std::time::Duration;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        parking_spot::{
            __path_create_parking_spot, __path_delete_parking_spot, __path_get_parking_spot_by_id,
            __path_get_parking_spots, __path_update_parking_spot, create_parking_spot,
            delete_parking_spot, get_parking_spot_by_id, get_parking_spots, update_parking_spot,
        },
        user::{__path_get_user_by_id, get_user_by_id},
    },
    doc::ApiDoc,
    middleware::access::enforce_route_access,
    state::AppState,
};

/// Builds the application router with documentation and middleware.
///
/// API routes sit behind the route access middleware. Swagger UI and the OpenAPI JSON
/// are merged afterwards so they stay public. CORS allows any origin, method and header
/// and caches preflight responses for `cors_max_age`.
pub fn router(state: AppState, cors_max_age: Duration) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_parking_spot, get_parking_spots))
        .routes(routes!(
            get_parking_spot_by_id,
            update_parking_spot,
            delete_parking_spot
        ))
        .routes(routes!(get_user_by_id))
        .split_for_parts();

    let api = api.route_layer(middleware::from_fn_with_state(
        state.clone(),
        enforce_route_access,
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(cors_max_age);

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
