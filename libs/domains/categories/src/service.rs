use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::models::Category;

/// Application-service contract the category handlers are written against.
///
/// Every operation reports failure as an absent value; not-found and
/// infrastructure failures are indistinguishable to the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryApplicationService: Send + Sync {
    /// Fetch every category
    async fn find_all(&self) -> Option<Vec<Category>>;

    /// Fetch one category by id
    async fn find_by_id(&self, id: i32) -> Option<Category>;

    /// Persist a new category, assigning its id
    async fn save(&self, category: Category) -> Option<Category>;

    /// Replace an existing category
    async fn edit(&self, category: Category) -> Option<Category>;

    /// Remove a category, returning the removed entity
    async fn remove(&self, id: i32) -> Option<Category>;
}

/// In-memory implementation of the category application service (for
/// development and testing). Cloning shares the underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryService {
    categories: Arc<RwLock<HashMap<i32, Category>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryCategoryService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryApplicationService for InMemoryCategoryService {
    async fn find_all(&self) -> Option<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by_key(|c| c.id);

        Some(result)
    }

    async fn find_by_id(&self, id: i32) -> Option<Category> {
        let categories = self.categories.read().await;
        categories.get(&id).cloned()
    }

    async fn save(&self, mut category: Category) -> Option<Category> {
        let mut categories = self.categories.write().await;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        category.id = id;
        categories.insert(id, category.clone());

        tracing::info!(category_id = id, "Created category");
        Some(category)
    }

    async fn edit(&self, category: Category) -> Option<Category> {
        let mut categories = self.categories.write().await;

        if !categories.contains_key(&category.id) {
            return None;
        }
        categories.insert(category.id, category.clone());

        tracing::info!(category_id = category.id, "Updated category");
        Some(category)
    }

    async fn remove(&self, id: i32) -> Option<Category> {
        let mut categories = self.categories.write().await;

        let removed = categories.remove(&id);
        if removed.is_some() {
            tracing::info!(category_id = id, "Deleted category");
        }
        removed
    }
}
