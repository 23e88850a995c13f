//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `email` - SMTP relay configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Email configuration
    pub email: EmailConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            email: EmailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            email: EmailConfig::from_env(),
            cors: if environment.is_development() {
                CorsConfig::development()
            } else {
                CorsConfig::default()
            },
        }
    }
}
