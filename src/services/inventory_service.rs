//! Inventory collection service.
//!
//! Deliberately smaller than the user service: the collection exposes
//! list and create only.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{CreateInventoryItem, InventoryItem};
use crate::errors::AppResult;

/// Inventory service trait for dependency injection.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// List all inventory items
    async fn list_items(&self) -> AppResult<Vec<InventoryItem>>;

    /// Create a new inventory item with a server-assigned id
    async fn create_item(&self, payload: CreateInventoryItem) -> AppResult<InventoryItem>;
}

/// In-memory implementation of [`InventoryService`].
pub struct InventoryStore {
    items: RwLock<Vec<InventoryItem>>,
}

impl InventoryStore {
    /// Create a store over the given records
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Create a store seeded with the fixed startup record (id 1)
    pub fn seeded() -> Self {
        Self::new(vec![InventoryItem {
            inventory_id: 1,
            name: "Ebony Dagger".to_string(),
            quantity: 1,
            price: 99.99,
        }])
    }
}

#[async_trait]
impl InventoryService for InventoryStore {
    async fn list_items(&self) -> AppResult<Vec<InventoryItem>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn create_item(&self, payload: CreateInventoryItem) -> AppResult<InventoryItem> {
        let mut items = self.items.write().await;
        // Same id-base rule as the user collection
        let next_id = items.iter().map(|i| i.inventory_id).max().unwrap_or(0) + 1;
        let item = InventoryItem {
            inventory_id: next_id,
            name: payload.name,
            quantity: payload.quantity,
            price: payload.price,
        };
        items.push(item.clone());
        tracing::debug!(inventory_id = next_id, "Inventory item created");
        Ok(item)
    }
}
