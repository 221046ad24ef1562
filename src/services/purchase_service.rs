// src/services/purchase_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        purchases::{Purchase, PurchasesSummary},
    },
    store::{audit::AuditStore, catalog::ProductStore, purchases::PurchaseStore},
};

// Compras são sempre registradas pela Central (entrada via nota fiscal)
#[derive(Clone)]
pub struct PurchaseService {
    purchases: PurchaseStore,
    products: ProductStore,
    audit: AuditStore,
}

impl PurchaseService {
    pub fn new(purchases: PurchaseStore, products: ProductStore, audit: AuditStore) -> Self {
        Self {
            purchases,
            products,
            audit,
        }
    }

    pub async fn register(
        &self,
        admin: &User,
        product_id: Uuid,
        quantity: Decimal,
        unit_price: Decimal,
        supplier_id: String,
    ) -> Result<Purchase, AppError> {
        let product = self
            .products
            .find(product_id)
            .await
            .ok_or_else(|| AppError::ResourceNotFound(format!("Produto {product_id}")))?;

        let now = Utc::now();
        let purchase = Purchase {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            unit_price,
            total_price: quantity * unit_price,
            supplier_id,
            purchase_date: now,
            received_by: admin.id,
            created_at: now,
        };
        self.purchases.prepend(purchase.clone()).await;

        self.audit
            .record(
                "purchase.registered",
                "purchase",
                purchase.id,
                admin,
                None,
                json!({ "product": product.name, "total": purchase.total_price }),
            )
            .await;

        Ok(purchase)
    }

    pub async fn list(&self) -> Vec<Purchase> {
        self.purchases.list().await
    }

    pub async fn summary(&self) -> PurchasesSummary {
        let purchases = self.purchases.list().await;
        PurchasesSummary {
            purchases: purchases.len(),
            items_acquired: purchases.iter().map(|p| p.quantity).sum(),
            total_invested: purchases.iter().map(|p| p.total_price).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{ADMIN_USER_ID, DIPIRONA_PRODUCT_ID, mock_data};

    #[tokio::test]
    async fn purchase_total_is_quantity_times_price() {
        let data = mock_data();
        let admin = data
            .users
            .iter()
            .find(|u| u.id == ADMIN_USER_ID)
            .cloned()
            .unwrap();
        let service = PurchaseService::new(
            PurchaseStore::new(Vec::new()),
            ProductStore::new(data.products),
            AuditStore::new(Vec::new()),
        );

        let purchase = service
            .register(
                &admin,
                DIPIRONA_PRODUCT_ID,
                Decimal::from(50),
                Decimal::new(850, 2),
                "supplier-1".into(),
            )
            .await
            .unwrap();

        assert_eq!(purchase.total_price, Decimal::new(42_500, 2));

        let summary = service.summary().await;
        assert_eq!(summary.purchases, 1);
        assert_eq!(summary.items_acquired, Decimal::from(50));
        assert_eq!(summary.total_invested, Decimal::new(42_500, 2));
    }
}
