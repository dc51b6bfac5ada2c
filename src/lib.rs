//! Roster API - An in-memory record-management backend
//!
//! This crate exposes two independent resource collections (game users
//! and inventory items) over HTTP with Axum. Each collection lives in
//! process memory for the lifetime of the server and resets on restart.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and validated request payloads
//! - **services**: Collection services (seed data, scan, mutate)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start on a specific port with verbose logging
//! cargo run -- --verbose serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{HealthPoints, InventoryItem, User};
pub use errors::{AppError, AppResult};
