use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::{Store, User, UserId, UserPayload};
use crate::server::error::ServerError;
use crate::server::state::SharedState;

pub const DELETE_COMPLETE: &str = "Delete is complete";

fn parse_id(raw: &str) -> Result<UserId, ServerError> {
    raw.parse().map_err(|_| ServerError::invalid_parameter())
}

fn parse_payload(body: &[u8]) -> Result<UserPayload, ServerError> {
    UserPayload::from_slice(body)
        .map_err(|err| ServerError::BadRequest(format!("Invalid request body: {}", err)))
}

pub async fn list_users(State(state): State<SharedState>) -> Result<Json<Store>, ServerError> {
    if let Some(msg) = state.load_error() {
        return Err(ServerError::Unavailable(msg.to_string()));
    }
    let users = state.read(Store::clone).await;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ServerError> {
    let id = parse_id(&id)?;
    state.read(|users| users.get(id).cloned()).await
        .map(Json)
        .ok_or_else(ServerError::no_matches)
}

pub async fn create_user(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ServerError> {
    let payload = parse_payload(&body)?;
    let user = state.mutate(|users| {
        let user = payload.into_user(users.next_id()?);
        users.insert(user.clone());
        Ok(user)
    }).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ServerError> {
    let id = parse_id(&id)?;
    let payload = parse_payload(&body)?;
    let user = state.mutate(|users| {
        users.rename(id, payload.name)
            .cloned()
            .ok_or_else(ServerError::no_matches)
    }).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<&'static str>), ServerError> {
    let id = parse_id(&id)?;
    state.mutate(|users| {
        users.remove(id).ok_or_else(ServerError::no_matches)
    }).await?;
    Ok((StatusCode::NO_CONTENT, Json(DELETE_COMPLETE)))
}
