// src/handlers/fleet.rs

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
    models::fleet::{Boat, BoatRefueling, FleetSummary, Refueling, Vehicle},
};

// GET /api/fleet/vehicles
#[utoipa::path(
    get,
    path = "/api/fleet/vehicles",
    tag = "Fleet",
    responses(
        (status = 200, description = "Veículos visíveis ao usuário", body = [Vehicle])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = app_state.fleet_service.list_vehicles(&user.0).await?;
    Ok((StatusCode::OK, Json(vehicles)))
}

// GET /api/fleet/boats
#[utoipa::path(
    get,
    path = "/api/fleet/boats",
    tag = "Fleet",
    responses(
        (status = 200, description = "Embarcações visíveis ao usuário", body = [Boat])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_boats(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let boats = app_state.fleet_service.list_boats(&user.0).await?;
    Ok((StatusCode::OK, Json(boats)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefuelingPayload {
    pub vehicle_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    #[schema(example = "35.0")]
    pub liters: Decimal,

    #[validate(custom(function = crate::handlers::validate_positive))]
    #[schema(example = "5.99")]
    pub price_per_liter: Decimal,

    #[validate(range(min = 0, message = "O odômetro não pode ser negativo."))]
    #[schema(example = 45800)]
    pub odometer: i64,
}

// POST /api/fleet/refuelings
#[utoipa::path(
    post,
    path = "/api/fleet/refuelings",
    tag = "Fleet",
    request_body = CreateRefuelingPayload,
    responses(
        (status = 201, description = "Abastecimento registrado e odômetro atualizado", body = Refueling),
        (status = 404, description = "Veículo não encontrado ou fora da filial do usuário"),
        (status = 422, description = "Odômetro menor que o registrado")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn register_refueling(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateRefuelingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let refueling = app_state
        .fleet_service
        .register_refueling(
            &user.0,
            payload.vehicle_id,
            payload.liters,
            payload.price_per_liter,
            payload.odometer,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(refueling)))
}

// GET /api/fleet/refuelings
#[utoipa::path(
    get,
    path = "/api/fleet/refuelings",
    tag = "Fleet",
    responses(
        (status = 200, description = "Abastecimentos de veículos, do mais recente para o mais antigo", body = [Refueling])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_refuelings(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let refuelings = app_state.fleet_service.list_refuelings(&user.0).await?;
    Ok((StatusCode::OK, Json(refuelings)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoatRefuelingPayload {
    pub boat_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub liters: Decimal,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub price_per_liter: Decimal,

    #[validate(custom(function = crate::handlers::validate_positive))]
    #[schema(example = "1325.5")]
    pub engine_hours: Decimal,

    #[schema(example = "Viagem de entrega a Monte Alegre")]
    pub notes: Option<String>,
}

// POST /api/fleet/boat-refuelings
#[utoipa::path(
    post,
    path = "/api/fleet/boat-refuelings",
    tag = "Fleet",
    request_body = CreateBoatRefuelingPayload,
    responses(
        (status = 201, description = "Abastecimento registrado e horímetro atualizado", body = BoatRefueling),
        (status = 404, description = "Embarcação não encontrada ou fora da filial do usuário"),
        (status = 422, description = "Horímetro menor que o registrado")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn register_boat_refueling(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateBoatRefuelingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let refueling = app_state
        .fleet_service
        .register_boat_refueling(
            &user.0,
            payload.boat_id,
            payload.liters,
            payload.price_per_liter,
            payload.engine_hours,
            payload.notes,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(refueling)))
}

// GET /api/fleet/boat-refuelings
#[utoipa::path(
    get,
    path = "/api/fleet/boat-refuelings",
    tag = "Fleet",
    responses(
        (status = 200, description = "Abastecimentos de embarcações, do mais recente para o mais antigo", body = [BoatRefueling])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_boat_refuelings(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let refuelings = app_state.fleet_service.list_boat_refuelings(&user.0).await?;
    Ok((StatusCode::OK, Json(refuelings)))
}

// GET /api/fleet/summary
#[utoipa::path(
    get,
    path = "/api/fleet/summary",
    tag = "Fleet",
    responses(
        (status = 200, description = "Litros, custo e contagens da frota", body = FleetSummary)
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn fleet_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.fleet_service.summary(&user.0).await?;
    Ok((StatusCode::OK, Json(summary)))
}
