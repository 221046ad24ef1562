// src/services/consumption_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        consumption::{Consumption, ConsumptionSummary},
    },
    services::visibility_scope,
    store::{
        audit::AuditStore, catalog::ProductStore, consumption::ConsumptionStore,
        inventory::InventoryStore,
    },
};

// Check-out de itens do estoque da filial, identificado por colaborador.
// Diferente da tela original (que só avisava), a baixa de estoque aqui é
// efetiva.
#[derive(Clone)]
pub struct ConsumptionService {
    consumptions: ConsumptionStore,
    inventory: InventoryStore,
    products: ProductStore,
    audit: AuditStore,
}

impl ConsumptionService {
    pub fn new(
        consumptions: ConsumptionStore,
        inventory: InventoryStore,
        products: ProductStore,
        audit: AuditStore,
    ) -> Self {
        Self {
            consumptions,
            inventory,
            products,
            audit,
        }
    }

    pub async fn register(
        &self,
        user: &User,
        product_id: Uuid,
        quantity: Decimal,
        consumed_by: String,
        consumed_by_cpf: String,
    ) -> Result<Consumption, AppError> {
        let branch_id = user.branch_id.ok_or(AppError::BranchOnly)?;

        let product = self
            .products
            .find(product_id)
            .await
            .ok_or_else(|| AppError::ResourceNotFound(format!("Produto {product_id}")))?;

        // Falha com 422 se o saldo disponível for insuficiente; o preço
        // unitário do consumo vem da própria entrada de estoque.
        let entry = self.inventory.deduct(branch_id, product_id, quantity).await?;

        let consumption = Consumption {
            id: Uuid::new_v4(),
            product_id,
            branch_id,
            quantity,
            consumed_by,
            consumed_by_cpf,
            consumed_at: Utc::now(),
            unit_price: entry.unit_price,
            total_price: quantity * entry.unit_price,
        };
        self.consumptions.prepend(consumption.clone()).await;

        self.audit
            .record(
                "consumption.registered",
                "consumption",
                consumption.id,
                user,
                Some(branch_id),
                json!({
                    "product": product.name,
                    "quantity": quantity,
                    "consumedBy": consumption.consumed_by,
                }),
            )
            .await;

        Ok(consumption)
    }

    pub async fn list(&self, user: &User) -> Result<Vec<Consumption>, AppError> {
        let scope = visibility_scope(user)?;
        Ok(self.consumptions.list(scope).await)
    }

    pub async fn summary(&self, user: &User) -> Result<ConsumptionSummary, AppError> {
        let scope = visibility_scope(user)?;
        let consumptions = self.consumptions.list(scope).await;
        let today = Utc::now().date_naive();

        Ok(ConsumptionSummary {
            registered_today: consumptions
                .iter()
                .filter(|c| c.consumed_at.date_naive() == today)
                .count(),
            total_value: consumptions.iter().map(|c| c.total_price).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{
        ARROZ_PRODUCT_ID, BELEM_BRANCH_ID, BELEM_OPERATOR_ID, LENCOL_PRODUCT_ID, mock_data,
    };

    fn service() -> (ConsumptionService, crate::models::auth::User) {
        let data = mock_data();
        let operator = data
            .users
            .iter()
            .find(|u| u.id == BELEM_OPERATOR_ID)
            .cloned()
            .unwrap();
        let service = ConsumptionService::new(
            ConsumptionStore::new(data.consumptions),
            InventoryStore::new(data.inventory),
            ProductStore::new(data.products),
            AuditStore::new(Vec::new()),
        );
        (service, operator)
    }

    #[tokio::test]
    async fn consumption_deducts_branch_stock_and_prices_from_inventory() {
        let (service, operator) = service();

        let before = service
            .inventory
            .branch_entry(BELEM_BRANCH_ID, ARROZ_PRODUCT_ID)
            .await
            .unwrap();

        let consumption = service
            .register(
                &operator,
                ARROZ_PRODUCT_ID,
                Decimal::from(5),
                "Carlos Lima".into(),
                "12312312300".into(),
            )
            .await
            .unwrap();

        assert_eq!(consumption.unit_price, before.unit_price);
        assert_eq!(consumption.total_price, Decimal::from(5) * before.unit_price);

        let after = service
            .inventory
            .branch_entry(BELEM_BRANCH_ID, ARROZ_PRODUCT_ID)
            .await
            .unwrap();
        assert_eq!(after.quantity, before.quantity - Decimal::from(5));
    }

    #[tokio::test]
    async fn insufficient_stock_is_a_client_error() {
        let (service, operator) = service();

        // Belém tem 30 pacotes de arroz na massa de dados
        let err = service
            .register(
                &operator,
                ARROZ_PRODUCT_ID,
                Decimal::from(500),
                "Carlos Lima".into(),
                "12312312300".into(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientStock { available } if available == Decimal::from(30)
        ));
    }

    #[tokio::test]
    async fn product_without_branch_entry_has_zero_available() {
        let (service, operator) = service();

        let err = service
            .register(
                &operator,
                LENCOL_PRODUCT_ID,
                Decimal::from(1),
                "Carlos Lima".into(),
                "12312312300".into(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientStock { available } if available == Decimal::ZERO
        ));
    }
}
