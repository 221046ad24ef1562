// src/handlers/purchases.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::purchases::{Purchase, PurchasesSummary},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchasePayload {
    pub product_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub quantity: Decimal,

    #[validate(custom(function = crate::handlers::validate_positive))]
    #[schema(example = "12.50")]
    pub unit_price: Decimal,

    #[validate(length(min = 1, message = "O fornecedor é obrigatório."))]
    #[schema(example = "supplier-1")]
    pub supplier_id: String,
}

// POST /api/purchases
#[utoipa::path(
    post,
    path = "/api/purchases",
    tag = "Purchases",
    request_body = CreatePurchasePayload,
    responses(
        (status = 201, description = "Compra registrada com valor total calculado", body = Purchase),
        (status = 403, description = "Somente a Central registra compras")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn register_purchase(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreatePurchasePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let admin = user.require_admin()?;

    let purchase = app_state
        .purchase_service
        .register(
            admin,
            payload.product_id,
            payload.quantity,
            payload.unit_price,
            payload.supplier_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(purchase)))
}

// GET /api/purchases
#[utoipa::path(
    get,
    path = "/api/purchases",
    tag = "Purchases",
    responses(
        (status = 200, description = "Compras registradas, da mais recente para a mais antiga", body = [Purchase])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_purchases(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    let purchases = app_state.purchase_service.list().await;
    Ok((StatusCode::OK, Json(purchases)))
}

// GET /api/purchases/summary
#[utoipa::path(
    get,
    path = "/api/purchases/summary",
    tag = "Purchases",
    responses(
        (status = 200, description = "Totais de compras (quantidade e valor investido)", body = PurchasesSummary)
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn purchases_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    let summary = app_state.purchase_service.summary().await;
    Ok((StatusCode::OK, Json(summary)))
}
