//! Collection services - Use cases over the in-memory record stores.
//!
//! Each resource collection is owned by exactly one service. Services
//! are exposed as traits so handlers depend on abstractions and tests
//! can substitute implementations.

mod inventory_service;
mod user_service;

pub use inventory_service::{InventoryService, InventoryStore};
pub use user_service::{UserRoster, UserService};
