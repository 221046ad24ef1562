// src/models/catalog.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Alimento,
    Medicamento,
    Enxoval,
    Outro,
}

// Catálogo de produtos da organização (referência, compartilhado por
// todas as filiais)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "7891234560011")]
    pub barcode: String,
    #[schema(example = "Arroz Branco 5kg")]
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    #[schema(example = "pacote")]
    pub unit: String,
    pub requires_barcode: bool,
    pub created_at: DateTime<Utc>,
}

// Resultado da consulta por código de barras. `in_central_stock` alimenta
// o aviso de envio sem estoque registrado na Central.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeLookup {
    pub found: bool,
    pub product: Option<Product>,
    pub in_central_stock: bool,
}
