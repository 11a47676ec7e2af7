//! Subscription repository interface

use async_trait::async_trait;

use super::model::Subscription;
use crate::domain::DomainResult;

/// Storage capability for subscriptions.
///
/// `list` returns one page of records plus the total count across all
/// pages, so any concrete store (SeaORM, in-memory mock) can back the
/// paginated listing endpoint.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn list(&self, limit: u64, offset: u64) -> DomainResult<(Vec<Subscription>, u64)>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Subscription>>;
    async fn insert(&self, subscription: Subscription) -> DomainResult<Subscription>;
    async fn update(&self, subscription: Subscription) -> DomainResult<Subscription>;
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
