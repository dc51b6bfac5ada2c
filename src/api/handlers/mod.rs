//! HTTP request handlers.

pub mod inventory_handler;
pub mod user_handler;

pub use inventory_handler::inventory_routes;
pub use user_handler::user_routes;
