// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::{
        catalog::ProductCategory,
        inventory::{BranchStockSummary, InventoryItem, InventoryReport},
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    pub search: Option<String>,
    pub category: Option<ProductCategory>,
    // Ignorado para operadores de filial (sempre a própria)
    pub branch_id: Option<Uuid>,
}

// GET /api/inventory/central
#[utoipa::path(
    get,
    path = "/api/inventory/central",
    tag = "Inventory",
    responses(
        (status = 200, description = "Inventário da Central com totais", body = InventoryReport)
    ),
    params(
        InventoryFilter,
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn central_report(
    State(app_state): State<AppState>,
    _user: CurrentUser,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .inventory_service
        .central_report(filter.search.as_deref(), filter.category)
        .await;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/inventory/branches
#[utoipa::path(
    get,
    path = "/api/inventory/branches",
    tag = "Inventory",
    responses(
        (status = 200, description = "Inventário das filiais visível ao usuário", body = InventoryReport)
    ),
    params(
        InventoryFilter,
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn branch_report(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .inventory_service
        .branch_report(
            &user.0,
            filter.branch_id,
            filter.search.as_deref(),
            filter.category,
        )
        .await?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/inventory/branches/summary
#[utoipa::path(
    get,
    path = "/api/inventory/branches/summary",
    tag = "Inventory",
    responses(
        (status = 200, description = "Totais agregados por filial ativa", body = [BranchStockSummary]),
        (status = 403, description = "Visão exclusiva da Central")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn branches_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    let summaries = app_state.inventory_service.branches_summary().await;
    Ok((StatusCode::OK, Json(summaries)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingPayload {
    // Um dos dois identifica o produto
    pub product_id: Option<Uuid>,
    #[schema(example = "7891234560011")]
    pub barcode: Option<String>,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub quantity: Decimal,
}

impl ReceivingPayload {
    // Validação de consistência: precisamos de ID ou código de barras
    fn validate_reference(&self) -> Result<(), ValidationError> {
        if self.product_id.is_none() && self.barcode.as_deref().is_none_or(str::is_empty) {
            let mut err = ValidationError::new("ProductReferenceRequired");
            err.message = Some("Informe o ID do produto ou o código de barras.".into());
            return Err(err);
        }
        Ok(())
    }
}

// POST /api/inventory/receiving
#[utoipa::path(
    post,
    path = "/api/inventory/receiving",
    tag = "Inventory",
    request_body = ReceivingPayload,
    responses(
        (status = 200, description = "Saldo atualizado após o recebimento", body = InventoryItem),
        (status = 404, description = "Produto não encontrado")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn confirm_receipt(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ReceivingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    payload.validate_reference().map_err(|e| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("productId", e);
        AppError::ValidationError(errors)
    })?;

    let entry = app_state
        .inventory_service
        .confirm_receipt(
            &user.0,
            payload.product_id,
            payload.barcode.as_deref(),
            payload.quantity,
        )
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}
