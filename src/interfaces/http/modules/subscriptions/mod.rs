//! Subscriptions module — paginated listing and CRUD over user subscriptions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
