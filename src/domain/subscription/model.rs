//! Subscription domain model

use chrono::{DateTime, Utc};

/// A user's subscription to an online service.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// Unique subscription ID (UUID)
    pub id: String,

    /// Name of the subscribed service (e.g., "Yandex Plus")
    pub service_name: String,

    /// Monthly price in the smallest currency unit
    pub price: i32,

    /// Owning user ID (UUID)
    pub user_id: String,

    /// When the subscription started
    pub started_at: DateTime<Utc>,

    /// When the subscription ended. `None` while it is still running
    pub ended_at: Option<DateTime<Utc>>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// A subscription without an end date is still active.
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Subscription {
        Subscription {
            id: "c1c2a1de-0000-4000-8000-000000000001".to_string(),
            service_name: "Yandex Plus".to_string(),
            price: 400,
            user_id: "60601fee-2bf1-4721-ae6f-7636e79a0cba".to_string(),
            started_at: Utc::now(),
            ended_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn subscription_without_end_date_is_active() {
        assert!(sample().is_active());
    }

    #[test]
    fn subscription_with_end_date_is_not_active() {
        let sub = Subscription {
            ended_at: Some(Utc::now()),
            ..sample()
        };
        assert!(!sub.is_active());
    }
}
