// src/handlers/orders.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::orders::{DirectShipment, Order, OrderCreated, OrdersSummary},
};

// =============================================================================
//  PEDIDOS DE REPOSIÇÃO (FILIAL -> CENTRAL)
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub product_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    #[schema(example = "10.0")]
    pub quantity: Decimal,

    // Obrigatória quando o item não é homologado para a filial
    #[schema(example = "Item necessário para a campanha de vacinação")]
    pub justification: Option<String>,
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado com status pendente", body = OrderCreated),
        (status = 403, description = "Usuário sem filial"),
        (status = 422, description = "Item não homologado sem justificativa")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    user.require_branch()?;

    let created = app_state
        .order_service
        .create_order(&user.0, payload.product_id, payload.quantity, payload.justification)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedidos visíveis ao usuário (filial: só os seus; Central: todos), do mais novo para o mais antigo", body = [Order])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_service.list_orders(&user.0).await?;
    Ok((StatusCode::OK, Json(orders)))
}

// POST /api/orders/{order_id}/approve
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/approve",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedido aprovado", body = Order),
        (status = 404, description = "Pedido não encontrado"),
        (status = 409, description = "Pedido não está pendente")
    ),
    params(
        ("order_id" = Uuid, Path, description = "ID do Pedido"),
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn approve_order(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let admin = user.require_admin()?;
    let order = app_state.order_service.approve_order(admin, order_id).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectOrderPayload {
    #[validate(length(min = 1, message = "O motivo da rejeição é obrigatório."))]
    #[schema(example = "Sem saldo em estoque na Central")]
    pub reason: String,
}

// POST /api/orders/{order_id}/reject
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/reject",
    tag = "Orders",
    request_body = RejectOrderPayload,
    responses(
        (status = 200, description = "Pedido rejeitado com motivo", body = Order),
        (status = 404, description = "Pedido não encontrado"),
        (status = 409, description = "Pedido não está pendente")
    ),
    params(
        ("order_id" = Uuid, Path, description = "ID do Pedido"),
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn reject_order(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<RejectOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let admin = user.require_admin()?;
    let order = app_state
        .order_service
        .reject_order(admin, order_id, payload.reason)
        .await?;
    Ok((StatusCode::OK, Json(order)))
}

// GET /api/orders/summary
#[utoipa::path(
    get,
    path = "/api/orders/summary",
    tag = "Orders",
    responses(
        (status = 200, description = "Contagens dos cartões de resumo", body = OrdersSummary)
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn orders_summary(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.order_service.summary(&user.0).await?;
    Ok((StatusCode::OK, Json(summary)))
}

// =============================================================================
//  ENVIOS DIRETOS (CENTRAL -> FILIAL)
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentPayload {
    pub branch_id: Uuid,
    pub product_id: Uuid,

    #[validate(custom(function = crate::handlers::validate_positive))]
    pub quantity: Decimal,

    #[schema(example = "Reposição programada")]
    pub notes: Option<String>,

    // Corresponde à caixa "enviar mesmo sem estoque registrado" da tela
    #[serde(default)]
    pub confirm_without_stock: bool,
}

// POST /api/shipments
#[utoipa::path(
    post,
    path = "/api/shipments",
    tag = "Orders",
    request_body = CreateShipmentPayload,
    responses(
        (status = 201, description = "Envio direto registrado em trânsito", body = DirectShipment),
        (status = 403, description = "Somente a Central envia produtos"),
        (status = 409, description = "Produto sem estoque na Central e sem confirmação"),
        (status = 422, description = "Filial de destino inativa")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn create_shipment(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateShipmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let admin = user.require_admin()?;

    let shipment = app_state
        .order_service
        .create_shipment(
            admin,
            payload.branch_id,
            payload.product_id,
            payload.quantity,
            payload.notes,
            payload.confirm_without_stock,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(shipment)))
}

// GET /api/shipments
#[utoipa::path(
    get,
    path = "/api/shipments",
    tag = "Orders",
    responses(
        (status = 200, description = "Histórico de envios diretos visível ao usuário", body = [DirectShipment])
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_shipments(
    State(app_state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let shipments = app_state.order_service.list_shipments(&user.0).await?;
    Ok((StatusCode::OK, Json(shipments)))
}
