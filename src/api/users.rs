// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! User record endpoints over the in-memory store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateUserRequest, UpdateUserRequest, User},
    state::AppState,
    stellar::strkey,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "All user records", body = [User]))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.list_users()))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    tag = "Users",
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Malformed wallet address"),
        (status = 409, description = "A user already exists for this wallet"),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if !strkey::is_valid_address(&request.wallet) {
        return Err(ApiError::bad_request("invalid wallet address format"));
    }
    let mut store = state.store.write().await;
    let user = store.create_user(request)?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address the record is keyed by")),
    tag = "Users",
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<User>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.user_by_wallet(&wallet)?))
}

#[utoipa::path(
    put,
    path = "/users/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address the record is keyed by")),
    request_body = UpdateUserRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found"),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.update_user(&wallet, request)?))
}

#[utoipa::path(
    delete,
    path = "/users/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address the record is keyed by")),
    tag = "Users",
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_user(&wallet)?;
    Ok(StatusCode::NO_CONTENT)
}
