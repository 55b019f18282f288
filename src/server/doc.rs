//! OpenAPI document for the HTTP API.
//!
//! Paths and schemas are collected from the `#[utoipa::path]` annotations when the
//! router registers each handler; this module only supplies the document metadata and
//! the basic auth security scheme the paths refer to.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// Name of the security scheme referenced by every protected path.
pub const BASIC_AUTH_SCHEME: &str = "basic_auth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parking Control API",
        description = "Register and manage parking spots reserved for residents' cars.",
        license(name = "Apache 2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "parking-spot", description = "Parking spot registration and lookup"),
        (name = "user", description = "User lookup")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BASIC_AUTH_SCHEME,
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}
