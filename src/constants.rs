//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Remote table holding the inventory
pub const DEFAULT_TABLE: &str = "items";

/// PostgREST path prefix on a hosted project URL
pub const REST_PATH: &str = "/rest/v1";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".inventory-tui";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Diagnostic log file, written to the working directory
pub const LOG_FILE: &str = "inventory.log";

/// Environment overrides
pub const ENV_URL: &str = "SUPABASE_URL";
pub const ENV_KEY: &str = "SUPABASE_KEY";
pub const ENV_TABLE: &str = "INVENTORY_TABLE";

/// Application name
pub const APP_NAME: &str = "My Items";
