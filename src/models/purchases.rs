// src/models/purchases.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Aquisição registrada pela Central (entrada via nota fiscal)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[schema(example = "supplier-1")]
    pub supplier_id: String,
    pub purchase_date: DateTime<Utc>,
    pub received_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesSummary {
    pub purchases: usize,
    pub items_acquired: Decimal,
    pub total_invested: Decimal,
}
