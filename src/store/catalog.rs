// src/store/catalog.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::catalog::{Product, ProductCategory};

#[derive(Clone)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn find(&self, id: Uuid) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    // Busca linear por código de barras, como a tela faz
    pub async fn find_by_barcode(&self, barcode: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.barcode == barcode)
            .cloned()
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        category: Option<ProductCategory>,
    ) -> Vec<Product> {
        let needle = search.map(|s| s.to_lowercase());
        self.products
            .read()
            .await
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                needle.as_deref().is_none_or(|s| {
                    p.name.to_lowercase().contains(s)
                        || p.description.to_lowercase().contains(s)
                        || p.barcode.contains(s)
                })
            })
            .cloned()
            .collect()
    }

    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(0, product);
    }
}
