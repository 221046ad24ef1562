// src/handlers/catalog.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::identity::CurrentUser,
    models::catalog::{BarcodeLookup, Product, ProductCategory},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    // Busca por nome, descrição ou código de barras
    pub search: Option<String>,
    pub category: Option<ProductCategory>,
}

// GET /api/catalog/products
#[utoipa::path(
    get,
    path = "/api/catalog/products",
    tag = "Catalog",
    responses(
        (status = 200, description = "Produtos do catálogo", body = [Product])
    ),
    params(
        ProductFilter,
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    _user: CurrentUser,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .catalog_service
        .list_products(filter.search.as_deref(), filter.category)
        .await;
    Ok((StatusCode::OK, Json(products)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O código de barras é obrigatório."))]
    #[schema(example = "7891234560059")]
    pub barcode: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub category: ProductCategory,

    #[validate(length(min = 1, message = "A unidade é obrigatória."))]
    #[schema(example = "caixa")]
    pub unit: String,

    #[serde(default)]
    pub requires_barcode: bool,
}

// POST /api/catalog/products
#[utoipa::path(
    post,
    path = "/api/catalog/products",
    tag = "Catalog",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto cadastrado", body = Product),
        (status = 403, description = "Somente a Central cadastra produtos")
    ),
    params(
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let admin = user.require_admin()?;

    let product = app_state
        .catalog_service
        .create_product(
            admin,
            payload.barcode,
            payload.name,
            payload.description,
            payload.category,
            payload.unit,
            payload.requires_barcode,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /api/catalog/barcode/{barcode}
#[utoipa::path(
    get,
    path = "/api/catalog/barcode/{barcode}",
    tag = "Catalog",
    responses(
        (status = 200, description = "Resultado da leitura (found = false quando não há produto)", body = BarcodeLookup)
    ),
    params(
        ("barcode" = String, Path, description = "Código de barras digitado ou escaneado"),
        ("x-user-id" = Uuid, Header, description = "Usuário atual")
    )
)]
pub async fn lookup_barcode(
    State(app_state): State<AppState>,
    _user: CurrentUser,
    Path(barcode): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = app_state.catalog_service.lookup_barcode(&barcode).await;
    Ok((StatusCode::OK, Json(lookup)))
}
