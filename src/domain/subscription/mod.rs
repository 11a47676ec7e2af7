//! Subscription domain: model and repository interface

pub mod model;
pub mod repository;

pub use model::Subscription;
pub use repository::SubscriptionRepository;
