// src/services/fleet_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        fleet::{Boat, BoatRefueling, FleetSummary, Refueling, Vehicle},
    },
    services::visibility_scope,
    store::{audit::AuditStore, fleet::FleetStore},
};

// Controle de abastecimento de veículos e embarcações das filiais
#[derive(Clone)]
pub struct FleetService {
    fleet: FleetStore,
    audit: AuditStore,
}

impl FleetService {
    pub fn new(fleet: FleetStore, audit: AuditStore) -> Self {
        Self { fleet, audit }
    }

    pub async fn list_vehicles(&self, user: &User) -> Result<Vec<Vehicle>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.fleet.list_vehicles(scope).await)
    }

    pub async fn list_boats(&self, user: &User) -> Result<Vec<Boat>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.fleet.list_boats(scope).await)
    }

    pub async fn list_refuelings(&self, user: &User) -> Result<Vec<Refueling>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.fleet.list_refuelings(scope).await)
    }

    pub async fn list_boat_refuelings(&self, user: &User) -> Result<Vec<BoatRefueling>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.fleet.list_boat_refuelings(scope).await)
    }

    // Abastecimento de veículo. Operadores só abastecem a frota da
    // própria filial; a leitura do odômetro nunca pode regredir e passa
    // a valer como a quilometragem do veículo.
    pub async fn register_refueling(
        &self,
        user: &User,
        vehicle_id: Uuid,
        liters: Decimal,
        price_per_liter: Decimal,
        odometer: i64,
    ) -> Result<Refueling, AppError> {
        let vehicle = self
            .fleet
            .find_vehicle(vehicle_id)
            .await
            .filter(|v| user.is_admin() || user.branch_id == Some(v.branch_id))
            .ok_or_else(|| AppError::ResourceNotFound(format!("Veículo {vehicle_id}")))?;

        let vehicle = self.fleet.advance_odometer(vehicle.id, odometer).await?;

        let refueling = Refueling {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            branch_id: vehicle.branch_id,
            liters,
            price_per_liter,
            total_price: liters * price_per_liter,
            odometer,
            fueled_by: user.id,
            fueled_at: Utc::now(),
        };
        self.fleet.prepend_refueling(refueling.clone()).await;

        self.audit
            .record(
                "refueling.registered",
                "refueling",
                refueling.id,
                user,
                Some(vehicle.branch_id),
                json!({ "plate": vehicle.plate, "liters": liters }),
            )
            .await;

        Ok(refueling)
    }

    // Idem para embarcações, com horímetro no lugar do odômetro
    pub async fn register_boat_refueling(
        &self,
        user: &User,
        boat_id: Uuid,
        liters: Decimal,
        price_per_liter: Decimal,
        engine_hours: Decimal,
        notes: Option<String>,
    ) -> Result<BoatRefueling, AppError> {
        let boat = self
            .fleet
            .find_boat(boat_id)
            .await
            .filter(|b| user.is_admin() || user.branch_id == Some(b.branch_id))
            .ok_or_else(|| AppError::ResourceNotFound(format!("Embarcação {boat_id}")))?;

        let boat = self.fleet.advance_engine_hours(boat.id, engine_hours).await?;

        let refueling = BoatRefueling {
            id: Uuid::new_v4(),
            boat_id: boat.id,
            branch_id: boat.branch_id,
            liters,
            price_per_liter,
            total_price: liters * price_per_liter,
            engine_hours,
            fueled_by: user.id,
            fueled_at: Utc::now(),
            notes: notes.filter(|n| !n.trim().is_empty()),
        };
        self.fleet.prepend_boat_refueling(refueling.clone()).await;

        self.audit
            .record(
                "boat_refueling.registered",
                "boat_refueling",
                refueling.id,
                user,
                Some(boat.branch_id),
                json!({ "boat": boat.name, "liters": liters }),
            )
            .await;

        Ok(refueling)
    }

    // Cartões da tela de abastecimento: contagens, litros e custo,
    // separados e combinados
    pub async fn summary(&self, user: &User) -> Result<FleetSummary, AppError> {
        let scope = visibility_scope(user)?;
        let refuelings = self.fleet.list_refuelings(scope).await;
        let boat_refuelings = self.fleet.list_boat_refuelings(scope).await;

        let vehicle_liters: Decimal = refuelings.iter().map(|r| r.liters).sum();
        let boat_liters: Decimal = boat_refuelings.iter().map(|r| r.liters).sum();
        let vehicle_cost: Decimal = refuelings.iter().map(|r| r.total_price).sum();
        let boat_cost: Decimal = boat_refuelings.iter().map(|r| r.total_price).sum();

        Ok(FleetSummary {
            refuelings: refuelings.len() + boat_refuelings.len(),
            vehicle_liters,
            boat_liters,
            total_liters: vehicle_liters + boat_liters,
            vehicle_cost,
            boat_cost,
            total_cost: vehicle_cost + boat_cost,
            vehicles: self.fleet.list_vehicles(scope).await.len(),
            boats: self.fleet.list_boats(scope).await.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{
        BELEM_OPERATOR_ID, BELEM_VEHICLE_ID, SANTAREM_VEHICLE_ID, mock_data,
    };

    fn service() -> (FleetService, crate::models::auth::User) {
        let data = mock_data();
        let operator = data
            .users
            .iter()
            .find(|u| u.id == BELEM_OPERATOR_ID)
            .cloned()
            .unwrap();
        let service = FleetService::new(
            FleetStore::new(data.vehicles, data.boats, data.refuelings, data.boat_refuelings),
            AuditStore::new(Vec::new()),
        );
        (service, operator)
    }

    #[tokio::test]
    async fn refueling_updates_odometer_and_computes_total() {
        let (service, operator) = service();

        let refueling = service
            .register_refueling(
                &operator,
                BELEM_VEHICLE_ID,
                Decimal::new(350, 1),
                Decimal::new(599, 2),
                45_800,
            )
            .await
            .unwrap();

        // 35.0 L x R$ 5,99 = R$ 209,65
        assert_eq!(refueling.total_price, Decimal::new(20_965, 2));
        let vehicle = service.fleet.find_vehicle(BELEM_VEHICLE_ID).await.unwrap();
        assert_eq!(vehicle.odometer, 45_800);
    }

    #[tokio::test]
    async fn odometer_cannot_regress() {
        let (service, operator) = service();

        let err = service
            .register_refueling(
                &operator,
                BELEM_VEHICLE_ID,
                Decimal::from(30),
                Decimal::new(589, 2),
                40_000,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MeterRegression { .. }));
    }

    #[tokio::test]
    async fn operator_cannot_fuel_other_branch_vehicle() {
        let (service, operator) = service();

        let err = service
            .register_refueling(
                &operator,
                SANTAREM_VEHICLE_ID,
                Decimal::from(30),
                Decimal::new(589, 2),
                90_000,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResourceNotFound(_)));
    }
}
