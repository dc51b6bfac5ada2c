//! User entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Health points enumeration.
///
/// A closed set of three values, carried on the wire as the bare
/// integer (150, 250 or 400). Any other integer is rejected during
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum HealthPoints {
    Low,
    #[default]
    Medium,
    High,
}

impl HealthPoints {
    /// Underlying point value
    pub fn points(self) -> u16 {
        match self {
            HealthPoints::Low => 150,
            HealthPoints::Medium => 250,
            HealthPoints::High => 400,
        }
    }
}

impl TryFrom<u16> for HealthPoints {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            150 => Ok(HealthPoints::Low),
            250 => Ok(HealthPoints::Medium),
            400 => Ok(HealthPoints::High),
            other => Err(format!(
                "healthpoints must be one of 150, 250 or 400, got {}",
                other
            )),
        }
    }
}

impl From<HealthPoints> for u16 {
    fn from(hp: HealthPoints) -> Self {
        hp.points()
    }
}

/// User record owned by the user collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned on creation and immutable thereafter
    #[schema(example = 1)]
    pub user_id: u32,
    /// First name of user
    #[schema(example = "Sammy")]
    pub first_name: String,
    /// Last name of user
    #[schema(example = "Freeman")]
    pub last_name: String,
    /// Game role of user (free-form)
    #[schema(example = "bard")]
    pub role: String,
    /// Health points of role
    #[schema(value_type = u16, example = 250)]
    pub healthpoints: HealthPoints,
}

impl User {
    /// Apply a partial update with strict presence semantics: every
    /// supplied field overwrites, every absent field is preserved.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(healthpoints) = update.healthpoints {
            self.healthpoints = healthpoints;
        }
    }
}

/// User creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// First name of user
    #[validate(length(min = 3, message = "first_name must be at least 3 characters"))]
    #[schema(example = "Sammy")]
    pub first_name: String,
    /// Last name of user
    #[validate(length(min = 3, message = "last_name must be at least 3 characters"))]
    #[schema(example = "Freeman")]
    pub last_name: String,
    /// Game role of user
    #[validate(length(min = 3, message = "role must be at least 3 characters"))]
    #[schema(example = "bard")]
    pub role: String,
    /// Health points of role, defaults to 250 when omitted
    #[serde(default)]
    #[schema(value_type = u16, example = 250)]
    pub healthpoints: HealthPoints,
}

/// Partial user update payload; absent fields leave the record unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New first name
    #[validate(length(min = 3, message = "first_name must be at least 3 characters"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    /// New last name
    #[validate(length(min = 3, message = "last_name must be at least 3 characters"))]
    #[schema(example = "Stone")]
    pub last_name: Option<String>,
    /// New game role
    #[validate(length(min = 3, message = "role must be at least 3 characters"))]
    #[schema(example = "monk")]
    pub role: Option<String>,
    /// New health points
    #[schema(value_type = Option<u16>, example = 400)]
    pub healthpoints: Option<HealthPoints>,
}
