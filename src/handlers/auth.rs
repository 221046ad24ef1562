// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::auth::{Branch, User},
};

// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuário identificado pelo cabeçalho", body = User),
        (status = 401, description = "Cabeçalho ausente ou usuário desconhecido")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn me(user: CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.0)))
}

// GET /api/auth/users
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuários disponíveis para troca de perfil", body = [User])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.org.list_users().await;
    Ok((StatusCode::OK, Json(users)))
}

// GET /api/branches
#[utoipa::path(
    get,
    path = "/api/branches",
    tag = "Auth",
    responses(
        (status = 200, description = "Filiais ativas", body = [Branch])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_branches(
    State(app_state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let branches = app_state.org.list_active_branches().await;
    Ok((StatusCode::OK, Json(branches)))
}
