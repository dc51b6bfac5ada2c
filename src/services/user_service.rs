//! User collection service.
//!
//! Owns the ordered sequence of user records. All operations scan the
//! sequence linearly; ids are unique so the first match is the only
//! match.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{CreateUser, HealthPoints, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: u32) -> AppResult<User>;

    /// List all users, optionally filtered by exact role match
    async fn list_users(&self, role: Option<String>) -> AppResult<Vec<User>>;

    /// Create a new user with a server-assigned id
    async fn create_user(&self, payload: CreateUser) -> AppResult<User>;

    /// Partially update a user; absent fields are preserved
    async fn update_user(&self, id: u32, payload: UpdateUser) -> AppResult<User>;

    /// Delete a user, returning the removed record
    async fn delete_user(&self, id: u32) -> AppResult<User>;
}

/// In-memory implementation of [`UserService`].
///
/// The RwLock serializes writers against each other and against
/// readers; reads run concurrently with other reads.
pub struct UserRoster {
    users: RwLock<Vec<User>>,
}

impl UserRoster {
    /// Create a roster over the given records
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a roster seeded with the fixed startup records (ids 1-7)
    pub fn seeded() -> Self {
        fn user(user_id: u32, first: &str, last: &str, role: &str, hp: HealthPoints) -> User {
            User {
                user_id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                role: role.to_string(),
                healthpoints: hp,
            }
        }

        Self::new(vec![
            user(1, "Sammy", "Freeman", "bard", HealthPoints::Medium),
            user(2, "Thomas", "Singh", "warrior", HealthPoints::High),
            user(3, "Kevin", "Muhammed", "fighter", HealthPoints::High),
            user(4, "Tessa", "Williams", "monk", HealthPoints::Medium),
            user(5, "Sarah", "Ming", "paladin", HealthPoints::High),
            user(6, "Dean", "The Great", "nurse", HealthPoints::Low),
            user(7, "Chester", "Nutt", "fighter", HealthPoints::High),
        ])
    }
}

#[async_trait]
impl UserService for UserRoster {
    async fn get_user(&self, id: u32) -> AppResult<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.user_id == id)
            .cloned()
            .ok_or_not_found()
    }

    async fn list_users(&self, role: Option<String>) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let result = match role {
            None => users.clone(),
            Some(role) => users.iter().filter(|u| u.role == role).cloned().collect(),
        };
        Ok(result)
    }

    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        // Empty collection has id-base 0, so the first assigned id is 1
        let next_id = users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1;
        let user = User {
            user_id: next_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            role: payload.role,
            healthpoints: payload.healthpoints,
        };
        users.push(user.clone());
        tracing::debug!(user_id = next_id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: u32, payload: UpdateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.user_id == id).ok_or_not_found()?;
        user.apply_update(payload);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: u32) -> AppResult<User> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.user_id == id)
            .ok_or_not_found()?;
        let user = users.remove(index);
        tracing::debug!(user_id = id, "User deleted");
        Ok(user)
    }
}
