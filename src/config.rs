// src/config.rs

use std::env;

use crate::{
    services::{
        catalog_service::CatalogService, consumption_service::ConsumptionService,
        fleet_service::FleetService, inventory_service::InventoryService,
        order_service::OrderService, purchase_service::PurchaseService,
    },
    store::{
        audit::AuditStore,
        catalog::ProductStore,
        consumption::ConsumptionStore,
        fleet::FleetStore,
        inventory::InventoryStore,
        orders::{OrderStore, ShipmentStore},
        org::OrgStore,
        purchases::PurchaseStore,
        seed::{self, SeedData},
    },
};

// O estado compartilhado que será acessível em toda a aplicação.
// Sem pool de banco: as coleções vivem em memória e morrem com o
// processo.
#[derive(Clone)]
pub struct AppState {
    pub org: OrgStore,
    pub audit: AuditStore,
    pub catalog_service: CatalogService,
    pub inventory_service: InventoryService,
    pub order_service: OrderService,
    pub purchase_service: PurchaseService,
    pub consumption_service: ConsumptionService,
    pub fleet_service: FleetService,
}

impl AppState {
    // Estado padrão, semeado com a massa de dados de demonstração
    pub fn new() -> Self {
        Self::from_seed(seed::mock_data())
    }

    pub fn from_seed(data: SeedData) -> Self {
        let org = OrgStore::new(data.users, data.branches, data.authorizations);
        let audit = AuditStore::new(data.audit);
        let products = ProductStore::new(data.products);
        let inventory = InventoryStore::new(data.inventory);

        let catalog_service =
            CatalogService::new(products.clone(), inventory.clone(), audit.clone());
        let inventory_service = InventoryService::new(
            inventory.clone(),
            products.clone(),
            org.clone(),
            audit.clone(),
        );
        let order_service = OrderService::new(
            OrderStore::new(data.orders),
            ShipmentStore::new(data.shipments),
            products.clone(),
            inventory.clone(),
            org.clone(),
            audit.clone(),
        );
        let purchase_service = PurchaseService::new(
            PurchaseStore::new(data.purchases),
            products.clone(),
            audit.clone(),
        );
        let consumption_service = ConsumptionService::new(
            ConsumptionStore::new(data.consumptions),
            inventory.clone(),
            products,
            audit.clone(),
        );
        let fleet_service = FleetService::new(
            FleetStore::new(
                data.vehicles,
                data.boats,
                data.refuelings,
                data.boat_refuelings,
            ),
            audit.clone(),
        );

        Self {
            org,
            audit,
            catalog_service,
            inventory_service,
            order_service,
            purchase_service,
            consumption_service,
            fleet_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Endereço de escuta do servidor (variável APP_ADDR do .env)
pub fn bind_addr() -> String {
    env::var("APP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
