// src/store/purchases.rs

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::purchases::Purchase;

#[derive(Clone)]
pub struct PurchaseStore {
    purchases: Arc<RwLock<Vec<Purchase>>>,
}

impl PurchaseStore {
    pub fn new(purchases: Vec<Purchase>) -> Self {
        Self {
            purchases: Arc::new(RwLock::new(purchases)),
        }
    }

    pub async fn list(&self) -> Vec<Purchase> {
        self.purchases.read().await.clone()
    }

    pub async fn prepend(&self, purchase: Purchase) {
        self.purchases.write().await.insert(0, purchase);
    }
}
