//! Health module — service liveness and database reachability

pub mod handlers;

pub use handlers::*;
