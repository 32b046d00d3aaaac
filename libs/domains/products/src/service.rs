use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::models::Product;

/// Application-service contract the product handlers are written against.
///
/// Every operation reports failure as an absent value; not-found and
/// infrastructure failures are indistinguishable to the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductApplicationService: Send + Sync {
    /// Fetch every product
    async fn find_all(&self) -> Option<Vec<Product>>;

    /// Fetch one product by id
    async fn find_by_id(&self, id: i32) -> Option<Product>;

    /// Persist a new product, assigning its id
    async fn save(&self, product: Product) -> Option<Product>;

    /// Replace an existing product
    async fn edit(&self, product: Product) -> Option<Product>;

    /// Remove a product, returning the removed entity
    async fn remove(&self, id: i32) -> Option<Product>;
}

/// In-memory implementation of the product application service (for
/// development and testing). Cloning shares the underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductService {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductApplicationService for InMemoryProductService {
    async fn find_all(&self) -> Option<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);

        Some(result)
    }

    async fn find_by_id(&self, id: i32) -> Option<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned()
    }

    async fn save(&self, mut product: Product) -> Option<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        product.id = id;
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Some(product)
    }

    async fn edit(&self, product: Product) -> Option<Product> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return None;
        }
        products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Updated product");
        Some(product)
    }

    async fn remove(&self, id: i32) -> Option<Product> {
        let mut products = self.products.write().await;

        let removed = products.remove(&id);
        if removed.is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        removed
    }
}
