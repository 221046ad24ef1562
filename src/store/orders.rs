// src/store/orders.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::orders::{DirectShipment, Order},
};

// Pedidos de reposição das filiais. Inserção sempre no topo: a listagem
// é do mais novo para o mais antigo.
#[derive(Clone)]
pub struct OrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
        }
    }

    pub async fn list(&self, branch_id: Option<Uuid>) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .filter(|o| branch_id.is_none_or(|b| o.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn prepend(&self, order: Order) {
        self.orders.write().await.insert(0, order);
    }

    // Leitura-modificação-escrita atômica sob o mesmo lock. A regra de
    // negócio fica no service; aqui só a localização do pedido.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Order, AppError>
    where
        F: FnOnce(&mut Order) -> Result<(), AppError>,
    {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::ResourceNotFound(format!("Pedido {id}")))?;
        apply(order)?;
        Ok(order.clone())
    }
}

// Envios diretos da Central às filiais
#[derive(Clone)]
pub struct ShipmentStore {
    shipments: Arc<RwLock<Vec<DirectShipment>>>,
}

impl ShipmentStore {
    pub fn new(shipments: Vec<DirectShipment>) -> Self {
        Self {
            shipments: Arc::new(RwLock::new(shipments)),
        }
    }

    pub async fn list(&self, branch_id: Option<Uuid>) -> Vec<DirectShipment> {
        self.shipments
            .read()
            .await
            .iter()
            .filter(|s| branch_id.is_none_or(|b| s.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn prepend(&self, shipment: DirectShipment) {
        self.shipments.write().await.insert(0, shipment);
    }
}
