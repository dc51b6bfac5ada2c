//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Validation
// =============================================================================
//
// The validator derive attributes in `domain` must repeat these bounds
// as literals; tests assert against the constants so a drift between
// the two fails the suite.

/// Minimum length for user first name, last name, and role
pub const MIN_USER_FIELD_LENGTH: u64 = 3;

/// Maximum length for an inventory item name
pub const MAX_ITEM_NAME_LENGTH: u64 = 100;
