// src/store/consumption.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::consumption::Consumption;

#[derive(Clone)]
pub struct ConsumptionStore {
    consumptions: Arc<RwLock<Vec<Consumption>>>,
}

impl ConsumptionStore {
    pub fn new(consumptions: Vec<Consumption>) -> Self {
        Self {
            consumptions: Arc::new(RwLock::new(consumptions)),
        }
    }

    pub async fn list(&self, branch_id: Option<Uuid>) -> Vec<Consumption> {
        self.consumptions
            .read()
            .await
            .iter()
            .filter(|c| branch_id.is_none_or(|b| c.branch_id == b))
            .cloned()
            .collect()
    }

    pub async fn prepend(&self, consumption: Consumption) {
        self.consumptions.write().await.insert(0, consumption);
    }
}
