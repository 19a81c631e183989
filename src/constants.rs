//! Constants used throughout the application
//!
//! This module centralizes file names, default values and diagnostic messages.

// Configuration
pub const CONFIG_FILE_NAME: &str = "nodelink.toml";
pub const CONFIG_DIR_NAME: &str = "nodelink";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "nodelink.log";

// Node defaults
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 8080;

// HTTP
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Log Messages
pub const LOG_TRANSFER_NETWORK_ERROR: &str = "❌ Request failed";
pub const LOG_TRANSFER_DECODE_ERROR: &str = "❌ Failed to decode response body";
pub const LOG_TRANSFER_SERIALIZE_ERROR: &str = "❌ Failed to encode request body";

// Display
/// Separator between the date and the offset in status lines
pub const STATUS_SEPARATOR: &str = " · ";
