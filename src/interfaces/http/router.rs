//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::SubscriptionRepository;
use crate::interfaces::http::common::StatusResponse;
use crate::interfaces::http::modules::{health, request_id, subscriptions};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Subscriptions
        subscriptions::handlers::list_subscriptions,
        subscriptions::handlers::create_subscription,
        subscriptions::handlers::get_subscription,
        subscriptions::handlers::update_subscription,
        subscriptions::handlers::delete_subscription,
    ),
    components(
        schemas(
            // Common
            StatusResponse,
            // Subscriptions
            subscriptions::SubscriptionDto,
            subscriptions::ListSubscriptionsResponse,
            subscriptions::SubscriptionResponse,
            subscriptions::CreateSubscriptionRequest,
            subscriptions::UpdateSubscriptionRequest,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Subscriptions", description = "User subscription management"),
    ),
    info(
        title = "Subscription Service API",
        version = "1.0.0",
        description = "REST API for managing user online subscriptions",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repo: Arc<dyn SubscriptionRepository>,
    db: DatabaseConnection,
) -> Router {
    let subscription_state = subscriptions::SubscriptionHandlerState { repo };

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let subscription_routes = Router::new()
        .route(
            "/",
            get(subscriptions::list_subscriptions).post(subscriptions::create_subscription),
        )
        .route(
            "/{id}",
            get(subscriptions::get_subscription)
                .put(subscriptions::update_subscription)
                .delete(subscriptions::delete_subscription),
        )
        .with_state(subscription_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Subscriptions
        .nest("/api/v1/subscriptions", subscription_routes)
        // Middleware
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
