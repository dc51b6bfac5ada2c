//! Application state - Dependency injection container.
//!
//! Provides centralized access to the two collection services.

use std::sync::Arc;

use crate::services::{InventoryService, InventoryStore, UserRoster, UserService};

/// Application state containing both collection services.
#[derive(Clone)]
pub struct AppState {
    /// User collection service
    pub user_service: Arc<dyn UserService>,
    /// Inventory collection service
    pub inventory_service: Arc<dyn InventoryService>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        inventory_service: Arc<dyn InventoryService>,
    ) -> Self {
        Self {
            user_service,
            inventory_service,
        }
    }

    /// Create application state over freshly seeded in-memory
    /// collections. This is what the server boots with.
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(UserRoster::seeded()),
            Arc::new(InventoryStore::seeded()),
        )
    }
}
