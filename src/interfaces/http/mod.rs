//! HTTP REST API interfaces
//!
//! - `common`: Shared response envelope and extractors
//! - `modules`: Request handlers grouped per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
