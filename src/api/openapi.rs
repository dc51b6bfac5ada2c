//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{inventory_handler, user_handler};
use crate::domain::{CreateInventoryItem, CreateUser, InventoryItem, UpdateUser, User};

/// OpenAPI documentation for the Roster API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "In-memory user roster and inventory CRUD API built with Axum",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::get_user,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Inventory endpoints
        inventory_handler::list_inventory,
        inventory_handler::create_inventory,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            InventoryItem,
            CreateInventoryItem,
        )
    ),
    tags(
        (name = "Users", description = "User collection operations"),
        (name = "Inventory", description = "Inventory collection operations")
    )
)]
pub struct ApiDoc;
