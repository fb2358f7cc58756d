use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    state::AppState,
    users::{
        dto::{UserPayload, UserResponse},
        repo::UserError,
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/:id", get(get_user).put(update_user))
        .route("/api/user", get(list_users))
        .route("/api/newuser", post(create_user))
        .route("/api/deleteuser/:id", delete(delete_user))
}

/// POST /api/newuser { name, kmmax, niveau }
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let Json(payload) = payload.map_err(bad_body)?;
    let id = state.users.create(&payload).await.map_err(failed)?;
    info!(user_id = id, "user created");
    Ok(Json(UserResponse::created(id)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, (StatusCode, String)> {
    let Path(id) = id.map_err(bad_id)?;
    let user = state.users.get(id).await.map_err(failed)?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.users.list().await.map_err(failed)?;
    Ok(Json(users))
}

/// PUT /api/user/:id { name, kmmax, niveau }
///
/// An unknown id is not an error: the response reports 0 rows affected.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let Path(id) = id.map_err(bad_id)?;
    let Json(payload) = payload.map_err(bad_body)?;
    let rows = state.users.update(id, &payload).await.map_err(failed)?;
    info!(user_id = id, rows, "user updated");
    Ok(Json(UserResponse::updated(id, rows)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let Path(id) = id.map_err(bad_id)?;
    let rows = state.users.delete(id).await.map_err(failed)?;
    info!(user_id = id, rows, "user deleted");
    Ok(Json(UserResponse::deleted(id, rows)))
}

fn bad_id(e: PathRejection) -> (StatusCode, String) {
    warn!(error = %e, "invalid user id");
    (StatusCode::BAD_REQUEST, "Invalid user id".into())
}

fn bad_body(e: JsonRejection) -> (StatusCode, String) {
    warn!(error = %e, "cannot decode request body");
    (StatusCode::BAD_REQUEST, e.body_text())
}

fn failed(e: UserError) -> (StatusCode, String) {
    match e {
        UserError::NotFound(id) => (StatusCode::NOT_FOUND, format!("User {id} not found")),
        UserError::Storage(e) => {
            error!(error = %e, "storage error");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
