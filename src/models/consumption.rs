// src/models/consumption.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Saída de itens do estoque da filial, rastreada por colaborador
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    pub id: Uuid,
    pub product_id: Uuid,
    pub branch_id: Uuid,
    pub quantity: Decimal,
    pub consumed_by: String,
    pub consumed_by_cpf: String,
    pub consumed_at: DateTime<Utc>,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSummary {
    pub registered_today: usize,
    pub total_value: Decimal,
}
