//! Subscription management handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use super::dto::{
    CreateSubscriptionRequest, ListSubscriptionsParams, ListSubscriptionsResponse,
    SubscriptionDto, SubscriptionResponse, UpdateSubscriptionRequest,
};
use crate::domain::subscription::{Subscription, SubscriptionRepository};
use crate::domain::DomainError;
use crate::interfaces::http::common::{StatusResponse, ValidatedJson};
use crate::interfaces::http::modules::request_id::RequestId;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Subscription handler state
#[derive(Clone)]
pub struct SubscriptionHandlerState {
    pub repo: Arc<dyn SubscriptionRepository>,
}

type ErrorReply = (StatusCode, Json<StatusResponse>);

fn internal_error() -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StatusResponse::error("internal error")),
    )
}

/// Strict-parse, lenient-range resolution of one paging parameter.
///
/// Absent and empty values resolve to `default`. A present value that does
/// not parse as an integer is an error. A value that parses but fails
/// `in_range` also resolves to `default` rather than being rejected.
fn resolve_param(
    raw: Option<&str>,
    default: i64,
    in_range: impl Fn(i64) -> bool,
) -> Result<i64, std::num::ParseIntError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => {
            let n: i64 = value.parse()?;
            Ok(if in_range(n) { n } else { default })
        }
    }
}

/// Integer ceiling division; defensively 0 pages for a zero page size.
fn total_pages(total_records: u64, page_size: i64) -> i64 {
    if page_size > 0 {
        (total_records as i64 + page_size - 1) / page_size
    } else {
        0
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    tag = "Subscriptions",
    params(ListSubscriptionsParams),
    responses(
        (status = 200, description = "Subscription list", body = ListSubscriptionsResponse),
        (status = 400, description = "Malformed paging parameter", body = StatusResponse),
        (status = 500, description = "Storage failure", body = StatusResponse)
    )
)]
pub async fn list_subscriptions(
    State(state): State<SubscriptionHandlerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Query(params): Query<ListSubscriptionsParams>,
) -> Result<Json<ListSubscriptionsResponse>, ErrorReply> {
    info!(request_id = %request_id, "List subscriptions started");

    let page = resolve_param(params.page.as_deref(), DEFAULT_PAGE, |n| n > 0).map_err(|e| {
        error!(request_id = %request_id, error = %e, "invalid page number");
        (
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::error("invalid page number")),
        )
    })?;

    let page_size = resolve_param(params.page_size.as_deref(), DEFAULT_PAGE_SIZE, |n| {
        n > 0 && n <= MAX_PAGE_SIZE
    })
    .map_err(|e| {
        error!(request_id = %request_id, error = %e, "invalid page size number");
        (
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::error("invalid page size number")),
        )
    })?;

    let offset = (page - 1).saturating_mul(page_size);

    // Single attempt; items and count are used exactly as returned
    let (subscriptions, total_records) = state
        .repo
        .list(page_size as u64, offset as u64)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Failed to list subscriptions");
            internal_error()
        })?;

    info!(request_id = %request_id, total_records, "Subscriptions listed successfully");

    Ok(Json(ListSubscriptionsResponse {
        status: "success".to_string(),
        message: "Subscriptions listed successfully".to_string(),
        total_records: total_records as i64,
        current_page: page,
        total_pages: total_pages(total_records, page_size),
        subscriptions: subscriptions
            .into_iter()
            .map(SubscriptionDto::from)
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    tag = "Subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 201, description = "Created", body = SubscriptionResponse),
        (status = 422, description = "Validation error", body = StatusResponse)
    )
)]
pub async fn create_subscription(
    State(state): State<SubscriptionHandlerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    ValidatedJson(request): ValidatedJson<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), ErrorReply> {
    let now = Utc::now();
    let subscription = Subscription {
        id: Uuid::new_v4().to_string(),
        service_name: request.service_name,
        price: request.price,
        user_id: request.user_id,
        started_at: request.started_at,
        ended_at: request.ended_at,
        created_at: now,
        updated_at: now,
    };

    let created = state.repo.insert(subscription).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Failed to create subscription");
        internal_error()
    })?;

    info!(request_id = %request_id, id = %created.id, "Subscription created successfully");

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionResponse::new(
            "Subscription created successfully",
            created.into(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/{id}",
    tag = "Subscriptions",
    params(("id" = String, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Subscription details", body = SubscriptionResponse),
        (status = 404, description = "Not found", body = StatusResponse)
    )
)]
pub async fn get_subscription(
    State(state): State<SubscriptionHandlerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<SubscriptionResponse>, ErrorReply> {
    let subscription = state.repo.find_by_id(&id).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Failed to fetch subscription");
        internal_error()
    })?;

    match subscription {
        Some(s) => Ok(Json(SubscriptionResponse::new(
            "Subscription fetched successfully",
            s.into(),
        ))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error("subscription not found")),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/subscriptions/{id}",
    tag = "Subscriptions",
    params(("id" = String, Path, description = "Subscription ID")),
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 200, description = "Updated", body = SubscriptionResponse),
        (status = 404, description = "Not found", body = StatusResponse),
        (status = 422, description = "Validation error", body = StatusResponse)
    )
)]
pub async fn update_subscription(
    State(state): State<SubscriptionHandlerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSubscriptionRequest>,
) -> Result<Json<SubscriptionResponse>, ErrorReply> {
    let subscription = state.repo.find_by_id(&id).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Failed to fetch subscription");
        internal_error()
    })?;

    let Some(mut subscription) = subscription else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error("subscription not found")),
        ));
    };

    if let Some(service_name) = request.service_name {
        subscription.service_name = service_name;
    }
    if let Some(price) = request.price {
        subscription.price = price;
    }
    if let Some(started_at) = request.started_at {
        subscription.started_at = started_at;
    }
    if let Some(ended_at) = request.ended_at {
        subscription.ended_at = Some(ended_at);
    }
    subscription.updated_at = Utc::now();

    let updated = state.repo.update(subscription).await.map_err(|e| match e {
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error("subscription not found")),
        ),
        _ => {
            error!(request_id = %request_id, error = %e, "Failed to update subscription");
            internal_error()
        }
    })?;

    info!(request_id = %request_id, id = %updated.id, "Subscription updated successfully");

    Ok(Json(SubscriptionResponse::new(
        "Subscription updated successfully",
        updated.into(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/{id}",
    tag = "Subscriptions",
    params(("id" = String, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Deleted", body = StatusResponse),
        (status = 404, description = "Not found", body = StatusResponse)
    )
)]
pub async fn delete_subscription(
    State(state): State<SubscriptionHandlerState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ErrorReply> {
    let deleted = state.repo.delete(&id).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Failed to delete subscription");
        internal_error()
    })?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error("subscription not found")),
        ));
    }

    info!(request_id = %request_id, id = %id, "Subscription deleted successfully");

    Ok(Json(StatusResponse::success(
        "Subscription deleted successfully",
    )))
}

// ── Tests ──────────────────────────────────────────────────────
