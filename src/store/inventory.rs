// src/store/inventory.rs

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{InventoryItem, ItemStatus},
};

// Saldos de estoque. `branch_id = None` é o almoxarifado da Central.
#[derive(Clone)]
pub struct InventoryStore {
    items: Arc<RwLock<Vec<InventoryItem>>>,
}

impl InventoryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn central(&self) -> Vec<InventoryItem> {
        self.items
            .read()
            .await
            .iter()
            .filter(|i| i.branch_id.is_none())
            .cloned()
            .collect()
    }

    pub async fn branches(&self, branch_id: Option<Uuid>) -> Vec<InventoryItem> {
        self.items
            .read()
            .await
            .iter()
            .filter(|i| i.branch_id.is_some())
            .filter(|i| branch_id.is_none_or(|b| i.branch_id == Some(b)))
            .cloned()
            .collect()
    }

    // Saldo da Central para um produto (alimenta o aviso de envio
    // sem estoque registrado)
    pub async fn central_entry(&self, product_id: Uuid) -> Option<InventoryItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| i.branch_id.is_none() && i.product_id == product_id)
            .cloned()
    }

    pub async fn branch_entry(&self, branch_id: Uuid, product_id: Uuid) -> Option<InventoryItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| i.branch_id == Some(branch_id) && i.product_id == product_id)
            .cloned()
    }

    // Baixa de consumo: falha se não houver saldo disponível suficiente.
    // Retorna a entrada já atualizada (o preço unitário dela precifica o
    // consumo).
    pub async fn deduct(
        &self,
        branch_id: Uuid,
        product_id: Uuid,
        quantity: Decimal,
    ) -> Result<InventoryItem, AppError> {
        let mut items = self.items.write().await;
        let entry = items
            .iter_mut()
            .find(|i| {
                i.branch_id == Some(branch_id)
                    && i.product_id == product_id
                    && i.status == ItemStatus::Disponivel
            })
            .ok_or(AppError::InsufficientStock {
                available: Decimal::ZERO,
            })?;

        if entry.quantity < quantity {
            return Err(AppError::InsufficientStock {
                available: entry.quantity,
            });
        }

        entry.quantity -= quantity;
        entry.last_updated = Utc::now();
        Ok(entry.clone())
    }

    // Entrada de recebimento: soma ao saldo existente ou cria a entrada.
    pub async fn receive(
        &self,
        branch_id: Option<Uuid>,
        product_id: Uuid,
        quantity: Decimal,
        fallback_price: Decimal,
    ) -> InventoryItem {
        let mut items = self.items.write().await;
        if let Some(entry) = items
            .iter_mut()
            .find(|i| i.branch_id == branch_id && i.product_id == product_id)
        {
            entry.quantity += quantity;
            entry.status = ItemStatus::Disponivel;
            entry.last_updated = Utc::now();
            return entry.clone();
        }

        let entry = InventoryItem {
            id: Uuid::new_v4(),
            product_id,
            branch_id,
            quantity,
            status: ItemStatus::Disponivel,
            unit_price: fallback_price,
            last_updated: Utc::now(),
        };
        items.insert(0, entry.clone());
        entry
    }
}
