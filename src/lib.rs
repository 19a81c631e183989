//! nodelink - node address store and JSON-over-HTTP helpers
//!
//! This library backs front-ends that manage remote API "nodes": it holds the
//! node currently being inserted or edited, talks JSON to node APIs, and
//! formats dates and UTC offsets for display.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - Log dispatch and in-memory diagnostics
//! * [`store`] - Shared state of the node form
//! * [`transfer`] - JSON-over-HTTP requests
//! * [`utils`] - Date and offset formatting

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Shared state of the node being inserted or edited
pub mod store;

/// HTTP helper exchanging JSON with node APIs
pub mod transfer;

/// Utility functions for date/time handling
pub mod utils;

pub use store::{Node, NodeState, NodeStore};
pub use transfer::{TransferClient, TransferError};
