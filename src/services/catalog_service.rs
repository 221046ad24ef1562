// src/services/catalog_service.rs

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        catalog::{BarcodeLookup, Product, ProductCategory},
    },
    store::{audit::AuditStore, catalog::ProductStore, inventory::InventoryStore},
};

#[derive(Clone)]
pub struct CatalogService {
    products: ProductStore,
    inventory: InventoryStore,
    audit: AuditStore,
}

impl CatalogService {
    pub fn new(products: ProductStore, inventory: InventoryStore, audit: AuditStore) -> Self {
        Self {
            products,
            inventory,
            audit,
        }
    }

    pub async fn list_products(
        &self,
        search: Option<&str>,
        category: Option<ProductCategory>,
    ) -> Vec<Product> {
        self.products.list(search, category).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_product(
        &self,
        admin: &User,
        barcode: String,
        name: String,
        description: String,
        category: ProductCategory,
        unit: String,
        requires_barcode: bool,
    ) -> Result<Product, AppError> {
        let product = Product {
            id: Uuid::new_v4(),
            barcode,
            name,
            description,
            category,
            unit,
            requires_barcode,
            created_at: Utc::now(),
        };
        self.products.insert(product.clone()).await;

        self.audit
            .record(
                "product.created",
                "product",
                product.id,
                admin,
                None,
                json!({ "name": product.name, "barcode": product.barcode }),
            )
            .await;

        Ok(product)
    }

    // Leitura de código de barras: resolve o produto e informa se ele
    // tem saldo registrado na Central (aviso da tela de envios).
    pub async fn lookup_barcode(&self, barcode: &str) -> BarcodeLookup {
        match self.products.find_by_barcode(barcode.trim()).await {
            Some(product) => {
                let in_central_stock =
                    self.inventory.central_entry(product.id).await.is_some();
                BarcodeLookup {
                    found: true,
                    product: Some(product),
                    in_central_stock,
                }
            }
            None => BarcodeLookup {
                found: false,
                product: None,
                in_central_stock: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{ARROZ_PRODUCT_ID, PILHA_PRODUCT_ID, mock_data};

    fn service() -> CatalogService {
        let data = mock_data();
        CatalogService::new(
            ProductStore::new(data.products),
            InventoryStore::new(data.inventory),
            AuditStore::new(Vec::new()),
        )
    }

    #[tokio::test]
    async fn barcode_lookup_reports_central_stock() {
        let service = service();

        let hit = service.lookup_barcode("7891234560011").await;
        assert!(hit.found);
        assert_eq!(hit.product.unwrap().id, ARROZ_PRODUCT_ID);
        assert!(hit.in_central_stock);

        // Produto catalogado mas sem saldo na Central
        let no_stock = service.lookup_barcode("7891234560042").await;
        assert!(no_stock.found);
        assert_eq!(no_stock.product.unwrap().id, PILHA_PRODUCT_ID);
        assert!(!no_stock.in_central_stock);

        let miss = service.lookup_barcode("0000000000000").await;
        assert!(!miss.found);
        assert!(miss.product.is_none());
    }

    #[tokio::test]
    async fn listing_filters_by_search_and_category() {
        let service = service();

        let by_name = service.list_products(Some("arroz"), None).await;
        assert_eq!(by_name.len(), 1);

        let by_category = service
            .list_products(None, Some(ProductCategory::Medicamento))
            .await;
        assert!(by_category.iter().all(|p| p.category == ProductCategory::Medicamento));
        assert!(!by_category.is_empty());
    }
}
