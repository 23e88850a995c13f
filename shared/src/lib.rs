//! Shared utilities and common types for the AM Estate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, EmailConfig, Environment, JwtConfig, ServerConfig,
};
pub use types::response::ErrorBody;
pub use utils::validation;
