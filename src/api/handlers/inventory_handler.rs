//! Inventory collection handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::domain::{CreateInventoryItem, InventoryItem};
use crate::errors::AppResult;
use crate::services::InventoryService;

/// Create inventory routes
pub fn inventory_routes() -> Router<AppState> {
    Router::new().route("/", get(list_inventory).post(create_inventory))
}

/// List all inventory items
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "List of inventory items", body = Vec<InventoryItem>)
    )
)]
pub async fn list_inventory(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = state.inventory_service.list_items().await?;
    Ok(Json(items))
}

/// Create a new inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "Inventory",
    request_body = CreateInventoryItem,
    responses(
        (status = 200, description = "Created item with assigned id", body = InventoryItem),
        (status = 422, description = "Payload fails field constraints")
    )
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateInventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.inventory_service.create_item(payload).await?;
    Ok(Json(item))
}
