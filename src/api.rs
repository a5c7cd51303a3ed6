use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::Value as JsonValue;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::{
    clients::health::HealthChecker,
    config::Config,
    models::{health::HealthStatus, request::NotificationRequest, response::ApiResponse},
    pipeline::{DispatchOutcome, dispatch_notification},
};

pub struct AppState {
    config: Config,
    health_checker: HealthChecker,
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        health_checker: HealthChecker::new(config.clone()),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/api/v1/notifications", post(create_notification))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Notification dispatch server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_notification(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    // Tolerant intake: missing or wrong-typed fields default downstream.
    // Only a body that fails to parse at all is rejected.
    let request: NotificationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed notification payload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    JsonValue::String("Malformed request body".to_string()),
                    "Failed to parse notification request".to_string(),
                )),
            );
        }
    };

    match dispatch_notification(&state.config, request).await {
        Ok(DispatchOutcome::Delivered) => (
            StatusCode::OK,
            Json(ApiResponse::success("Notification sent".to_string())),
        ),
        Ok(DispatchOutcome::Skipped) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                "Delivery skipped: maintenance mode active with no recipients".to_string(),
            )),
        ),
        Err(e) => {
            error!(error = %e, "Notification dispatch failed");
            (
                e.status_code(),
                Json(ApiResponse::error(
                    e.detail(),
                    "Notification dispatch failed".to_string(),
                )),
            )
        }
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
