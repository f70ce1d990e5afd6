use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::users::User;
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::ServerState};

/// Create/update payload. An `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

fn decode_body(body: Result<Json<UserInput>, JsonRejection>) -> Result<UserInput, JsonApiError> {
    body.map(|Json(input)| input).map_err(|rej| {
        warn!(err = %rej.body_text(), "rejected user payload");
        JsonApiError::bad_request("Invalid input")
    })
}

fn decode_path_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    id.map(|Path(id)| id).map_err(|_| JsonApiError::bad_request("Invalid ID"))
}

fn decode_query_id(q: Result<Query<IdQuery>, QueryRejection>) -> Result<i32, JsonApiError> {
    q.ok()
        .and_then(|Query(q)| q.id)
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .ok_or_else(|| JsonApiError::bad_request("Invalid ID"))
}

async fn create_user(state: &ServerState, input: UserInput) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let user = state
        .users
        .create_user(&input.name, &input.email)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to create user"))?;
    info!(id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(state: &ServerState, id: i32) -> Result<Json<User>, JsonApiError> {
    state
        .users
        .get_user(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to get user"))
}

async fn update_user(state: &ServerState, id: i32, input: UserInput) -> Result<Json<User>, JsonApiError> {
    let user = state
        .users
        .update_user(id, &input.name, &input.email)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to update user"))?;
    info!(id = user.id, "updated user");
    Ok(Json(user))
}

async fn delete_user(state: &ServerState, id: i32) -> Result<StatusCode, JsonApiError> {
    state
        .users
        .delete_user(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete user"))?;
    info!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let input = decode_body(body)?;
    create_user(&state, input).await
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, JsonApiError> {
    let id = decode_path_id(id)?;
    get_user(&state, id).await
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, JsonApiError> {
    let id = decode_path_id(id)?;
    let input = decode_body(body)?;
    update_user(&state, id, input).await
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = decode_path_id(id)?;
    delete_user(&state, id).await
}

pub async fn get_by_query(
    State(state): State<ServerState>,
    q: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<User>, JsonApiError> {
    let id = decode_query_id(q)?;
    get_user(&state, id).await
}

pub async fn update_by_query(
    State(state): State<ServerState>,
    q: Result<Query<IdQuery>, QueryRejection>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, JsonApiError> {
    let id = decode_query_id(q)?;
    let input = decode_body(body)?;
    update_user(&state, id, input).await
}

pub async fn delete_by_query(
    State(state): State<ServerState>,
    q: Result<Query<IdQuery>, QueryRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = decode_query_id(q)?;
    delete_user(&state, id).await
}
