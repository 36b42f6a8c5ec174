//! User controller.

use crate::{
    extractors::{UserBody, UserIdPath},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use roster_core::{ErrorResponse, User};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
}

/// Get a user by ID.
///
/// Returns the first user created with the ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User identifier; malformed values resolve to 0 unless strict id parsing is enabled")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed identifier (strict mode only)", body = ErrorResponse),
        (status = 404, description = "No user with this identifier", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<User> {
    debug!("Get user request: {}", id);

    let user = state.user_service.get_user(id).await?;
    ok(user)
}

/// Create a user.
///
/// The stored user is echoed back unchanged.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 200, description = "User stored", body = User),
        (status = 400, description = "Malformed body or failed validation (strict/validating modes only)", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    UserBody(user): UserBody,
) -> ApiResult<User> {
    debug!("Create user request: {}", user.id);

    let user = state.user_service.create_user(user).await?;
    ok(user)
}
