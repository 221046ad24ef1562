// src/handlers/consumption.rs

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
    models::consumption::{Consumption, ConsumptionSummary},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsumptionPayload {
    pub product_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub quantity: Decimal,

    #[validate(length(min = 1, message = "O nome do colaborador é obrigatório."))]
    #[schema(example = "Carlos Lima")]
    pub consumed_by: String,

    #[validate(length(min = 11, max = 14, message = "CPF inválido."))]
    #[schema(example = "12312312300")]
    pub consumed_by_cpf: String,
}

// POST /api/consumption
#[utoipa::path(
    post,
    path = "/api/consumption",
    tag = "Consumption",
    request_body = CreateConsumptionPayload,
    responses(
        (status = 201, description = "Consumo registrado com baixa de estoque", body = Consumption),
        (status = 403, description = "Somente operadores de filial registram consumo"),
        (status = 422, description = "Estoque insuficiente")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn register_consumption(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateConsumptionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    user.require_branch()?;

    let consumption = app_state
        .consumption_service
        .register(
            &user.0,
            payload.product_id,
            payload.quantity,
            payload.consumed_by,
            payload.consumed_by_cpf,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(consumption)))
}

// GET /api/consumption
#[utoipa::path(
    get,
    path = "/api/consumption",
    tag = "Consumption",
    responses(
        (status = 200, description = "Consumos visíveis ao usuário", body = [Consumption])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_consumptions(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let consumptions = app_state.consumption_service.list(&user.0).await?;
    Ok((StatusCode::OK, Json(consumptions)))
}

// GET /api/consumption/summary
#[utoipa::path(
    get,
    path = "/api/consumption/summary",
    tag = "Consumption",
    responses(
        (status = 200, description = "Consumos de hoje e valor acumulado", body = ConsumptionSummary)
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn consumption_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.consumption_service.summary(&user.0).await?;
    Ok((StatusCode::OK, Json(summary)))
}
