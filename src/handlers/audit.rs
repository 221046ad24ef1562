// src/handlers/audit.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, middleware::identity::CurrentUser,
    models::audit::AuditLog,
};

// GET /api/audit
#[utoipa::path(
    get,
    path = "/api/audit",
    tag = "Audit",
    responses(
        (status = 200, description = "Trilha de auditoria, da mais recente para a mais antiga", body = [AuditLog]),
        (status = 403, description = "Visão exclusiva da Central")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_audit(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    let entries = app_state.audit.list().await;
    Ok((StatusCode::OK, Json(entries)))
}
