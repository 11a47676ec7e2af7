//! Subscription DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::subscription::Subscription;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: String,
    pub service_name: String,
    pub price: i32,
    pub user_id: String,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Subscription> for SubscriptionDto {
    fn from(s: Subscription) -> Self {
        let active = s.is_active();
        Self {
            id: s.id,
            service_name: s.service_name,
            price: s.price,
            user_id: s.user_id,
            started_at: s.started_at.to_rfc3339(),
            ended_at: s.ended_at.map(|d| d.to_rfc3339()),
            active,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

/// Raw paging parameters for the listing endpoint.
///
/// Both values are taken as optional strings so the handler can tell a
/// missing value (use the default) from a present but non-numeric one
/// (reject with 400) — serde-level integer parsing cannot make that split.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListSubscriptionsParams {
    /// Page number (>= 1). Default: 1
    pub page: Option<String>,
    /// Page size (1..100). Default: 20
    pub page_size: Option<String>,
}

/// Response envelope for the paginated listing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ListSubscriptionsResponse {
    pub status: String,
    pub message: String,
    pub total_records: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub subscriptions: Vec<SubscriptionDto>,
}

/// Response envelope for single-subscription operations
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    pub status: String,
    pub message: String,
    pub subscription: SubscriptionDto,
}

impl SubscriptionResponse {
    pub fn new(message: impl Into<String>, subscription: SubscriptionDto) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            subscription,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubscriptionRequest {
    #[validate(length(min = 1, max = 200))]
    pub service_name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 1, max = 200))]
    pub service_name: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}
