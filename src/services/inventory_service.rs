// src/services/inventory_service.rs

use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        catalog::ProductCategory,
        inventory::{BranchStockSummary, InventoryEntryView, InventoryItem, InventoryReport},
    },
    store::{
        audit::AuditStore, catalog::ProductStore, inventory::InventoryStore, org::OrgStore,
    },
};

// Abaixo deste saldo a entrada conta como "estoque baixo" nos relatórios
fn low_stock_threshold() -> Decimal {
    Decimal::from(20)
}

#[derive(Clone)]
pub struct InventoryService {
    inventory: InventoryStore,
    products: ProductStore,
    org: OrgStore,
    audit: AuditStore,
}

impl InventoryService {
    pub fn new(
        inventory: InventoryStore,
        products: ProductStore,
        org: OrgStore,
        audit: AuditStore,
    ) -> Self {
        Self {
            inventory,
            products,
            org,
            audit,
        }
    }

    // Junta a entrada de estoque com os dados do catálogo, descartando
    // entradas órfãs (produto removido do catálogo).
    async fn enrich(&self, items: Vec<InventoryItem>) -> Vec<InventoryEntryView> {
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            let Some(product) = self.products.find(item.product_id).await else {
                continue;
            };
            views.push(InventoryEntryView {
                id: item.id,
                product_id: item.product_id,
                product_name: product.name,
                barcode: product.barcode,
                category: product.category,
                unit: product.unit,
                branch_id: item.branch_id,
                quantity: item.quantity,
                status: item.status,
                unit_price: item.unit_price,
                total_value: item.quantity * item.unit_price,
                last_updated: item.last_updated,
            });
        }
        views
    }

    fn filter_and_total(
        entries: Vec<InventoryEntryView>,
        search: Option<&str>,
        category: Option<ProductCategory>,
    ) -> InventoryReport {
        let needle = search.map(|s| s.to_lowercase());
        let entries: Vec<InventoryEntryView> = entries
            .into_iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .filter(|e| {
                needle.as_deref().is_none_or(|s| {
                    e.product_name.to_lowercase().contains(s) || e.barcode.contains(s)
                })
            })
            .collect();

        let total_quantity = entries.iter().map(|e| e.quantity).sum();
        let total_value = entries.iter().map(|e| e.total_value).sum();
        let low_stock_items = entries
            .iter()
            .filter(|e| e.quantity < low_stock_threshold())
            .count();

        InventoryReport {
            entries,
            total_quantity,
            total_value,
            low_stock_items,
        }
    }

    pub async fn central_report(
        &self,
        search: Option<&str>,
        category: Option<ProductCategory>,
    ) -> InventoryReport {
        let entries = self.enrich(self.inventory.central().await).await;
        Self::filter_and_total(entries, search, category)
    }

    // Operador vê só a própria filial; o admin pode filtrar por qualquer
    // uma (ou nenhuma, vendo todas).
    pub async fn branch_report(
        &self,
        user: &User,
        branch_id: Option<Uuid>,
        search: Option<&str>,
        category: Option<ProductCategory>,
    ) -> Result<InventoryReport, AppError> {
        let scope = if user.is_admin() {
            branch_id
        } else {
            Some(user.branch_id.ok_or(AppError::BranchOnly)?)
        };
        let entries = self.enrich(self.inventory.branches(scope).await).await;
        Ok(Self::filter_and_total(entries, search, category))
    }

    // Visão agregada por filial ativa (somente Central)
    pub async fn branches_summary(&self) -> Vec<BranchStockSummary> {
        let mut summaries = Vec::new();
        for branch in self.org.list_active_branches().await {
            let entries = self
                .enrich(self.inventory.branches(Some(branch.id)).await)
                .await;
            summaries.push(BranchStockSummary {
                branch_id: branch.id,
                branch_name: branch.name,
                branch_code: branch.code,
                total_quantity: entries.iter().map(|e| e.quantity).sum(),
                total_value: entries.iter().map(|e| e.total_value).sum(),
                low_stock_items: entries
                    .iter()
                    .filter(|e| e.quantity < low_stock_threshold())
                    .count(),
            });
        }
        summaries
    }

    // Confirmação de recebimento: soma a quantidade ao estoque do local
    // do usuário (filial do operador, Central para o admin). O produto
    // pode ser identificado por ID ou por código de barras.
    pub async fn confirm_receipt(
        &self,
        user: &User,
        product_id: Option<Uuid>,
        barcode: Option<&str>,
        quantity: Decimal,
    ) -> Result<InventoryItem, AppError> {
        let product = match (product_id, barcode) {
            (Some(id), _) => self.products.find(id).await,
            (None, Some(code)) => self.products.find_by_barcode(code.trim()).await,
            (None, None) => None,
        }
        .ok_or_else(|| AppError::ResourceNotFound("Produto".to_string()))?;

        // Sem preço conhecido no destino, herda o da Central
        let fallback_price = self
            .inventory
            .central_entry(product.id)
            .await
            .map(|e| e.unit_price)
            .unwrap_or(Decimal::ZERO);

        let entry = self
            .inventory
            .receive(user.branch_id, product.id, quantity, fallback_price)
            .await;

        self.audit
            .record(
                "inventory.received",
                "inventory",
                entry.id,
                user,
                user.branch_id,
                json!({ "product": product.name, "quantity": quantity }),
            )
            .await;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{
        ARROZ_PRODUCT_ID, BELEM_BRANCH_ID, BELEM_OPERATOR_ID, SANTAREM_BRANCH_ID, mock_data,
    };

    fn service() -> (InventoryService, crate::models::auth::User) {
        let data = mock_data();
        let operator = data
            .users
            .iter()
            .find(|u| u.id == BELEM_OPERATOR_ID)
            .cloned()
            .unwrap();
        let service = InventoryService::new(
            InventoryStore::new(data.inventory),
            ProductStore::new(data.products),
            OrgStore::new(data.users, data.branches, data.authorizations),
            AuditStore::new(Vec::new()),
        );
        (service, operator)
    }

    #[tokio::test]
    async fn central_report_totals_match_entries() {
        let (service, _) = service();
        let report = service.central_report(None, None).await;

        assert!(!report.entries.is_empty());
        let expected: Decimal = report.entries.iter().map(|e| e.total_value).sum();
        assert_eq!(report.total_value, expected);
    }

    #[tokio::test]
    async fn branch_report_is_scoped_for_operators() {
        let (service, operator) = service();

        // O filtro por outra filial é ignorado para operadores
        let report = service
            .branch_report(&operator, Some(SANTAREM_BRANCH_ID), None, None)
            .await
            .unwrap();
        assert!(
            report
                .entries
                .iter()
                .all(|e| e.branch_id == Some(BELEM_BRANCH_ID))
        );
    }

    #[tokio::test]
    async fn low_stock_is_counted_below_threshold() {
        let (service, _) = service();
        let admin_view = service
            .branch_report(
                &crate::models::auth::User {
                    id: uuid::Uuid::new_v4(),
                    name: "Admin".into(),
                    email: "a@a".into(),
                    cpf: "0".into(),
                    role: crate::models::auth::UserRole::Admin,
                    branch_id: None,
                    active: true,
                    created_at: chrono::Utc::now(),
                },
                Some(SANTAREM_BRANCH_ID),
                None,
                None,
            )
            .await
            .unwrap();

        // Santarém tem 8 pacotes de arroz na massa de dados
        assert_eq!(admin_view.low_stock_items, 1);
    }

    #[tokio::test]
    async fn receipt_adds_to_existing_balance() {
        let (service, operator) = service();

        let before = service
            .inventory
            .branch_entry(BELEM_BRANCH_ID, ARROZ_PRODUCT_ID)
            .await
            .unwrap();
        let entry = service
            .confirm_receipt(&operator, Some(ARROZ_PRODUCT_ID), None, Decimal::from(15))
            .await
            .unwrap();

        assert_eq!(entry.quantity, before.quantity + Decimal::from(15));
    }

    #[tokio::test]
    async fn receipt_by_barcode_creates_missing_entry() {
        let (service, operator) = service();

        // Lençol não tem saldo em Belém; a entrada é criada com o preço
        // herdado da Central
        let entry = service
            .confirm_receipt(&operator, None, Some("7891234560035"), Decimal::from(10))
            .await
            .unwrap();

        assert_eq!(entry.branch_id, Some(BELEM_BRANCH_ID));
        assert_eq!(entry.quantity, Decimal::from(10));
        assert_eq!(entry.unit_price, Decimal::new(3500, 2));
    }
}
