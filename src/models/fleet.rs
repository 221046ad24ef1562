// src/models/fleet.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    #[schema(example = "QEA-1B23")]
    pub plate: String,
    pub model: String,
    pub branch_id: Uuid,
    // Quilometragem acumulada; nunca regride
    pub odometer: i64,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Refueling {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub branch_id: Uuid,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    pub total_price: Decimal,
    pub odometer: i64,
    pub fueled_by: Uuid,
    pub fueled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "PA-1234-5678")]
    pub registration: String,
    pub model: String,
    pub branch_id: Uuid,
    // Horímetro do motor; nunca regride
    pub engine_hours: Decimal,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoatRefueling {
    pub id: Uuid,
    pub boat_id: Uuid,
    pub branch_id: Uuid,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    pub total_price: Decimal,
    pub engine_hours: Decimal,
    pub fueled_by: Uuid,
    pub fueled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

// Resumo combinado de combustível (veículos + embarcações)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub refuelings: usize,
    pub vehicle_liters: Decimal,
    pub boat_liters: Decimal,
    pub total_liters: Decimal,
    pub vehicle_cost: Decimal,
    pub boat_cost: Decimal,
    pub total_cost: Decimal,
    pub vehicles: usize,
    pub boats: usize,
}
