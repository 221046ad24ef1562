// src/store/fleet.rs

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::fleet::{Boat, BoatRefueling, Refueling, Vehicle},
};

// Frota (veículos e embarcações) e seus abastecimentos
#[derive(Clone)]
pub struct FleetStore {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
    boats: Arc<RwLock<Vec<Boat>>>,
    refuelings: Arc<RwLock<Vec<Refueling>>>,
    boat_refuelings: Arc<RwLock<Vec<BoatRefueling>>>,
}

impl FleetStore {
    pub fn new(
        vehicles: Vec<Vehicle>,
        boats: Vec<Boat>,
        refuelings: Vec<Refueling>,
        boat_refuelings: Vec<BoatRefueling>,
    ) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(vehicles)),
            boats: Arc::new(RwLock::new(boats)),
            refuelings: Arc::new(RwLock::new(refuelings)),
            boat_refuelings: Arc::new(RwLock::new(boat_refuelings)),
        }
    }

    pub async fn list_vehicles(&self, branch_id: Option<Uuid>) -> Vec<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .filter(|v| branch_id.is_none_or(|b| v.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn list_boats(&self, branch_id: Option<Uuid>) -> Vec<Boat> {
        self.boats
            .read()
            .await
            .iter()
            .filter(|b| branch_id.is_none_or(|id| b.branch_id == id))
            .cloned()
            .collect()
    }

    pub async fn find_vehicle(&self, id: Uuid) -> Option<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    pub async fn find_boat(&self, id: Uuid) -> Option<Boat> {
        self.boats.read().await.iter().find(|b| b.id == id).cloned()
    }

    // Atualiza o odômetro do veículo; a leitura nunca pode regredir.
    pub async fn advance_odometer(&self, id: Uuid, odometer: i64) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::ResourceNotFound(format!("Veículo {id}")))?;
        if odometer < vehicle.odometer {
            return Err(AppError::MeterRegression {
                registered: format!("{} km", vehicle.odometer),
            });
        }
        vehicle.odometer = odometer;
        Ok(vehicle.clone())
    }

    // Idem para o horímetro da embarcação
    pub async fn advance_engine_hours(
        &self,
        id: Uuid,
        engine_hours: Decimal,
    ) -> Result<Boat, AppError> {
        let mut boats = self.boats.write().await;
        let boat = boats
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::ResourceNotFound(format!("Embarcação {id}")))?;
        if engine_hours < boat.engine_hours {
            return Err(AppError::MeterRegression {
                registered: format!("{} h", boat.engine_hours),
            });
        }
        boat.engine_hours = engine_hours;
        Ok(boat.clone())
    }

    pub async fn list_refuelings(&self, branch_id: Option<Uuid>) -> Vec<Refueling> {
        self.refuelings
            .read()
            .await
            .iter()
            .filter(|r| branch_id.is_none_or(|b| r.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn list_boat_refuelings(&self, branch_id: Option<Uuid>) -> Vec<BoatRefueling> {
        self.boat_refuelings
            .read()
            .await
            .iter()
            .filter(|r| branch_id.is_none_or(|b| r.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn prepend_refueling(&self, refueling: Refueling) {
        self.refuelings.write().await.insert(0, refueling);
    }

    pub async fn prepend_boat_refueling(&self, refueling: BoatRefueling) {
        self.boat_refuelings.write().await.insert(0, refueling);
    }
}
