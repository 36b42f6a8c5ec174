//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use axum::Json;
use roster_core::{ErrorResponse, User};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "In-memory user lookup and creation",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::create_user,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(User, ErrorResponse, HealthResponse)
    ),
    tags(
        (name = "users", description = "User lookup and creation"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
