//! SeaORM implementation of SubscriptionRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use tracing::debug;

use crate::domain::subscription::{Subscription, SubscriptionRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::subscription;

pub struct SeaOrmSubscriptionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubscriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(s: subscription::Model) -> Subscription {
    Subscription {
        id: s.id,
        service_name: s.service_name,
        price: s.price,
        user_id: s.user_id,
        started_at: s.started_at,
        ended_at: s.ended_at,
        created_at: s.created_at,
        updated_at: s.updated_at,
    }
}

fn domain_to_active(s: Subscription) -> subscription::ActiveModel {
    subscription::ActiveModel {
        id: Set(s.id),
        service_name: Set(s.service_name),
        price: Set(s.price),
        user_id: Set(s.user_id),
        started_at: Set(s.started_at),
        ended_at: Set(s.ended_at),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── SubscriptionRepository impl ─────────────────────────────────

#[async_trait]
impl SubscriptionRepository for SeaOrmSubscriptionRepository {
    async fn list(&self, limit: u64, offset: u64) -> DomainResult<(Vec<Subscription>, u64)> {
        debug!("Listing subscriptions: limit={}, offset={}", limit, offset);

        let query = subscription::Entity::find()
            .order_by_desc(subscription::Column::CreatedAt)
            .order_by_desc(subscription::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Subscription>> {
        let model = subscription::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn insert(&self, sub: Subscription) -> DomainResult<Subscription> {
        debug!("Saving subscription: {}", sub.id);
        let created = domain_to_active(sub)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(created))
    }

    async fn update(&self, sub: Subscription) -> DomainResult<Subscription> {
        debug!("Updating subscription: {}", sub.id);

        let existing = subscription::Entity::find_by_id(&sub.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Subscription",
                field: "id",
                value: sub.id,
            });
        }

        let updated = domain_to_active(sub)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let result = subscription::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
