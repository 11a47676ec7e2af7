//! Subscription entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription model - one row per user subscription to a service
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    /// Unique subscription ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Name of the subscribed service
    pub service_name: String,

    /// Monthly price in the smallest currency unit
    pub price: i32,

    /// Owning user ID (UUID)
    pub user_id: String,

    /// When the subscription started
    pub started_at: DateTime<Utc>,

    /// When the subscription ended (NULL while active)
    pub ended_at: Option<DateTime<Utc>>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
