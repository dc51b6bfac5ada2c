//! Domain layer - Core entities and request payloads
//!
//! This module contains the record types owned by the collection
//! services together with the validated payloads that create and
//! mutate them.

pub mod inventory;
pub mod user;

pub use inventory::{CreateInventoryItem, InventoryItem};
pub use user::{CreateUser, HealthPoints, UpdateUser, User};
