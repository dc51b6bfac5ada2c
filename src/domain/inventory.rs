//! Inventory item entity and creation payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Inventory record owned by the inventory collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    /// Unique identifier, assigned on creation
    #[schema(example = 1)]
    pub inventory_id: u32,
    /// Item name
    #[schema(example = "Ebony Dagger")]
    pub name: String,
    /// Number of items in stock
    #[schema(example = 1)]
    pub quantity: u32,
    /// Unit price
    #[schema(example = 99.99)]
    pub price: f64,
}

/// Inventory item creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItem {
    /// Item name
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    #[schema(example = "Ebony Dagger")]
    pub name: String,
    /// Number of items in stock
    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    #[schema(example = 1)]
    pub quantity: u32,
    /// Unit price
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    #[schema(example = 99.99)]
    pub price: f64,
}
