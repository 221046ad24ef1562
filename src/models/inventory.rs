// src/models/inventory.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::catalog::ProductCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Cadastrado,
    EmTransito,
    Disponivel,
    Consumido,
}

// Saldo de um produto em um local. `branch_id = None` significa o
// almoxarifado da Central.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub quantity: Decimal,
    pub status: ItemStatus,
    pub unit_price: Decimal,
    pub last_updated: DateTime<Utc>,
}

// Entrada de estoque enriquecida com os dados do catálogo, como as
// tabelas de inventário exibem.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntryView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub barcode: String,
    pub category: ProductCategory,
    pub unit: String,
    pub branch_id: Option<Uuid>,
    pub quantity: Decimal,
    pub status: ItemStatus,
    pub unit_price: Decimal,
    pub total_value: Decimal,
    pub last_updated: DateTime<Utc>,
}

// Relatório de inventário (Central ou filiais) com os totais agregados
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub entries: Vec<InventoryEntryView>,
    pub total_quantity: Decimal,
    pub total_value: Decimal,
    // Itens abaixo do limite mínimo de estoque
    pub low_stock_items: usize,
}

// Resumo agregado por filial
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchStockSummary {
    pub branch_id: Uuid,
    pub branch_name: String,
    pub branch_code: String,
    pub total_quantity: Decimal,
    pub total_value: Decimal,
    pub low_stock_items: usize,
}
