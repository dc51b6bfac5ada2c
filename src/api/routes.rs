//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{inventory_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppResult;
use crate::services::{InventoryService, UserService};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Resource collections. Inventory exposes list and create only;
        // anything else falls through routing as method/route not found.
        .nest("/user", user_routes())
        .nest("/inventory", inventory_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Roster API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    collections: CollectionCounts,
}

/// Record counts per collection
#[derive(Serialize)]
struct CollectionCounts {
    users: usize,
    inventory: usize,
}

/// Health check endpoint reporting per-collection record counts
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let users = state.user_service.list_users(None).await?.len();
    let inventory = state.inventory_service.list_items().await?.len();

    Ok(Json(HealthResponse {
        status: "healthy",
        collections: CollectionCounts { users, inventory },
    }))
}
