//! # Subscription Service
//!
//! REST service for managing user online subscriptions.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **infrastructure**: External concerns (database, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
