// src/middleware/identity.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, models::auth::User};

// Não há autenticação real (o original alterna usuários fixos na tela de
// login); o cabeçalho X-User-Id escolhe com qual usuário da massa de
// dados a requisição roda.
pub const USER_ID_HEADER: &str = "x-user-id";

// O middleware em si: resolve o cabeçalho contra o conjunto de usuários
// e injeta o `User` nos "extensions" da requisição.
pub async fn identity_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or(AppError::UnknownUser)?;

    let user = app_state
        .org
        .find_user(user_id)
        .await
        .filter(|u| u.active)
        .ok_or(AppError::UnknownUser)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// Extrator para obter o usuário atual diretamente nos handlers
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::UnknownUser)
    }
}

impl CurrentUser {
    // Guarda de perfil: operações da Central
    pub fn require_admin(&self) -> Result<&User, AppError> {
        if self.0.is_admin() {
            Ok(&self.0)
        } else {
            Err(AppError::AdminOnly)
        }
    }

    // Guarda de perfil: operações de filial (retorna a filial do operador)
    pub fn require_branch(&self) -> Result<Uuid, AppError> {
        self.0.branch_id.ok_or(AppError::BranchOnly)
    }
}
