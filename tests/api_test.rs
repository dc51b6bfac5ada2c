//! API-level tests: routing, domain model wire behavior, payload
//! validation, error responses, and the service trait seam used by
//! the handlers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use tower::ServiceExt;
use validator::Validate;

use roster_api::api::{create_router, AppState};
use roster_api::config::MIN_USER_FIELD_LENGTH;
use roster_api::domain::{
    CreateInventoryItem, CreateUser, HealthPoints, InventoryItem, UpdateUser, User,
};
use roster_api::errors::{AppError, AppResult};
use roster_api::services::{InventoryService, InventoryStore, UserService};

// =============================================================================
// Router Tests
// =============================================================================

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request is well-formed")
}

#[tokio::test]
async fn test_router_get_user_by_id() {
    let app = create_router(AppState::seeded());

    let response = app
        .oneshot(Request::get("/user/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_unknown_user_id_is_404() {
    let app = create_router(AppState::seeded());

    let response = app
        .oneshot(Request::get("/user/99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_router_create_user_with_out_of_set_healthpoints_is_422() {
    let app = create_router(AppState::seeded());

    let body = r#"{"first_name": "Mira", "last_name": "Voss", "role": "ranger", "healthpoints": 300}"#;
    let response = app
        .oneshot(json_request("POST", "/user", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_router_create_user_with_short_name_is_422() {
    let app = create_router(AppState::seeded());

    let body = r#"{"first_name": "Mi", "last_name": "Voss", "role": "ranger"}"#;
    let response = app
        .oneshot(json_request("POST", "/user", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_router_rejects_inventory_update_as_unsupported_method() {
    let app = create_router(AppState::seeded());

    // /inventory routes only GET and POST; mutation of existing items
    // is not part of the surface and must fail in routing, not in a
    // service.
    let body = r#"{"name": "Ebony Dagger", "quantity": 2, "price": 50.0}"#;
    let response = app
        .oneshot(json_request("PUT", "/inventory", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_router_rejects_inventory_delete_as_unknown_route() {
    let app = create_router(AppState::seeded());

    let response = app
        .oneshot(
            Request::delete("/inventory/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_router_invalid_inventory_payload_leaves_collection_unchanged() {
    let state = AppState::seeded();
    let app = create_router(state.clone());

    let body = r#"{"name": "Glass Sword", "quantity": 0, "price": -1.0}"#;
    let response = app
        .oneshot(json_request("POST", "/inventory", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.inventory_service.list_items().await.unwrap().len(), 1);
}

// =============================================================================
// HealthPoints Wire Format Tests
// =============================================================================

#[tokio::test]
async fn test_healthpoints_from_valid_integers() {
    assert_eq!(HealthPoints::try_from(150).unwrap(), HealthPoints::Low);
    assert_eq!(HealthPoints::try_from(250).unwrap(), HealthPoints::Medium);
    assert_eq!(HealthPoints::try_from(400).unwrap(), HealthPoints::High);
}

#[tokio::test]
async fn test_healthpoints_rejects_out_of_set_integers() {
    assert!(HealthPoints::try_from(0).is_err());
    assert!(HealthPoints::try_from(200).is_err());
    assert!(HealthPoints::try_from(401).is_err());
}

#[tokio::test]
async fn test_healthpoints_default_is_medium() {
    assert_eq!(HealthPoints::default(), HealthPoints::Medium);
    assert_eq!(HealthPoints::default().points(), 250);
}

#[tokio::test]
async fn test_healthpoints_serializes_as_bare_integer() {
    let json = serde_json::to_string(&HealthPoints::High).unwrap();
    assert_eq!(json, "400");

    let hp: HealthPoints = serde_json::from_str("150").unwrap();
    assert_eq!(hp, HealthPoints::Low);

    // Out-of-set values fail at deserialization
    assert!(serde_json::from_str::<HealthPoints>("200").is_err());
}

#[tokio::test]
async fn test_user_record_wire_shape() {
    let user = User {
        user_id: 1,
        first_name: "Sammy".to_string(),
        last_name: "Freeman".to_string(),
        role: "bard".to_string(),
        healthpoints: HealthPoints::Medium,
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["user_id"], 1);
    assert_eq!(json["healthpoints"], 250);
}

// =============================================================================
// Payload Deserialization Tests
// =============================================================================

#[tokio::test]
async fn test_create_user_healthpoints_defaults_when_omitted() {
    let payload: CreateUser = serde_json::from_str(
        r#"{"first_name": "Mira", "last_name": "Voss", "role": "ranger"}"#,
    )
    .unwrap();

    assert_eq!(payload.healthpoints, HealthPoints::Medium);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_healthpoints() {
    let result = serde_json::from_str::<CreateUser>(
        r#"{"first_name": "Mira", "last_name": "Voss", "role": "ranger", "healthpoints": 300}"#,
    );

    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_user_absent_fields_deserialize_to_none() {
    let payload: UpdateUser = serde_json::from_str(r#"{"last_name": "Stone"}"#).unwrap();

    assert_eq!(payload.last_name.as_deref(), Some("Stone"));
    assert!(payload.first_name.is_none());
    assert!(payload.role.is_none());
    assert!(payload.healthpoints.is_none());
}

// =============================================================================
// Payload Validation Tests
// =============================================================================

#[tokio::test]
async fn test_create_user_validation() {
    let valid = CreateUser {
        first_name: "Mira".to_string(),
        last_name: "Voss".to_string(),
        role: "ranger".to_string(),
        healthpoints: HealthPoints::Medium,
    };
    assert!(valid.validate().is_ok());

    let short_first_name = CreateUser {
        first_name: "x".repeat(MIN_USER_FIELD_LENGTH as usize - 1),
        ..valid.clone()
    };
    assert!(short_first_name.validate().is_err());

    let short_role = CreateUser {
        role: "dj".to_string(),
        ..valid
    };
    assert!(short_role.validate().is_err());
}

#[tokio::test]
async fn test_update_user_validates_supplied_fields_only() {
    let absent = UpdateUser::default();
    assert!(absent.validate().is_ok());

    let short_supplied = UpdateUser {
        last_name: Some("St".to_string()),
        ..Default::default()
    };
    assert!(short_supplied.validate().is_err());
}

#[tokio::test]
async fn test_inventory_payload_validation() {
    let valid = CreateInventoryItem {
        name: "Glass Sword".to_string(),
        quantity: 3,
        price: 149.5,
    };
    assert!(valid.validate().is_ok());

    let zero_quantity = CreateInventoryItem {
        quantity: 0,
        ..valid.clone()
    };
    assert!(zero_quantity.validate().is_err());

    let negative_price = CreateInventoryItem {
        price: -1.0,
        ..valid
    };
    assert!(negative_price.validate().is_err());
}

// =============================================================================
// Error Response Tests
// =============================================================================

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_maps_to_422() {
    let response = AppError::validation("quantity must be greater than 0").into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_internal_maps_to_500() {
    let response = AppError::internal("bind failure").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Service Trait Seam Tests
// =============================================================================

/// Minimal stand-in user service proving handlers can run against any
/// trait implementation, not just the in-memory roster.
struct SingleUserService;

#[async_trait]
impl UserService for SingleUserService {
    async fn get_user(&self, id: u32) -> AppResult<User> {
        if id == 1 {
            Ok(User {
                user_id: 1,
                first_name: "Only".to_string(),
                last_name: "User".to_string(),
                role: "bard".to_string(),
                healthpoints: HealthPoints::Medium,
            })
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn list_users(&self, _role: Option<String>) -> AppResult<Vec<User>> {
        Ok(vec![self.get_user(1).await?])
    }

    async fn create_user(&self, _payload: CreateUser) -> AppResult<User> {
        self.get_user(1).await
    }

    async fn update_user(&self, id: u32, _payload: UpdateUser) -> AppResult<User> {
        self.get_user(id).await
    }

    async fn delete_user(&self, id: u32) -> AppResult<User> {
        self.get_user(id).await
    }
}

#[tokio::test]
async fn test_app_state_accepts_any_service_implementation() {
    let state = AppState::new(
        Arc::new(SingleUserService),
        Arc::new(InventoryStore::seeded()),
    );

    let users = state.user_service.list_users(None).await.unwrap();
    assert_eq!(users.len(), 1);

    let result = state.user_service.get_user(2).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));

    let items: Vec<InventoryItem> = state.inventory_service.list_items().await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_seeded_state_collection_sizes() {
    let state = AppState::seeded();

    assert_eq!(state.user_service.list_users(None).await.unwrap().len(), 7);
    assert_eq!(state.inventory_service.list_items().await.unwrap().len(), 1);
}
