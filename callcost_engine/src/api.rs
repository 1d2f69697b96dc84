//! HTTP API for the Call Cost Engine.
//!
//! This module exposes a minimal REST API around the projection engine
//! using the [`axum`](https://crates.io/crates/axum) framework.  Clients
//! post the raw state of their form and receive the projection result
//! together with formatted metric cards.  Because the engine sanitises
//! its input, any JSON object is a valid request body.

use crate::config::ServerConfig;
use crate::engine::project_raw;
use crate::error::ApiError;
use crate::format::{metric_cards, MetricCard};
use crate::models::{ProjectionInput, ProjectionResult, RawProjectionInput, SubscriptionPlan};
use crate::presets::{default_input, plan_catalogue};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub result: ProjectionResult,
    pub cards: Vec<MetricCard>,
}

/// Build the API router.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/projection", post(projection_handler))
        .route("/api/defaults", get(defaults_handler))
        .route("/api/plans", get(plans_handler))
        .route("/api/health", get(health_handler))
}

/// Handler for POST /api/projection
async fn projection_handler(
    Json(input): Json<RawProjectionInput>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    // The curve and sensitivity sweeps are CPU bound; keep them off the
    // async workers.
    let result = tokio::task::spawn_blocking(move || project_raw(&input)).await?;
    debug!(
        monthly_savings = result.metrics.monthly_savings,
        "projection served"
    );
    let cards = metric_cards(&result);
    Ok(Json(ProjectionResponse { result, cards }))
}

async fn defaults_handler() -> Json<ProjectionInput> {
    Json(default_input())
}

async fn plans_handler() -> Json<Vec<SubscriptionPlan>> {
    Json(plan_catalogue())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Launch the API server.  Binds to the configured address and blocks
/// until the server terminates.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "server listening");
    axum::serve(listener, build_router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/api/projection")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = build_router().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    async fn get_bytes(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = build_router().oneshot(req).await.unwrap();
        let status = resp.status();
        (status, resp.into_body().collect().await.unwrap().to_bytes())
    }

    #[tokio::test]
    async fn test_projection_endpoint() {
        let body = r#"{
            "active_count": 4,
            "staff": [
                {"weekly_hours": 15, "hourly_wage": 16},
                {"weekly_hours": "15", "hourly_wage": "16"},
                {"weekly_hours": 15, "hourly_wage": 16},
                {"weekly_hours": 15, "hourly_wage": 16}
            ],
            "calls_per_week": 410,
            "avg_call_time_minutes": 3,
            "automation_percent": 70,
            "plan_cost": 399
        }"#;
        let (status, value) = post_json(body).await;
        assert_eq!(status, StatusCode::OK);
        let savings = value["result"]["metrics"]["monthly_savings"]
            .as_f64()
            .unwrap();
        assert!((savings - 588.28).abs() < 1e-6);
        assert_eq!(value["result"]["curve"].as_array().unwrap().len(), 54);
        assert!(value["cards"].as_array().unwrap().len() > 5);
    }

    #[tokio::test]
    async fn test_empty_object_is_accepted() {
        let (status, value) = post_json("{}").await;
        assert_eq!(status, StatusCode::OK);
        assert!(value["result"]["break_even"].is_null());
        assert!(value["result"]["metrics"]["payback_period"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (status, _) = post_json("{not json").await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_defaults_endpoint() {
        let (status, bytes) = get_bytes("/api/defaults").await;
        assert_eq!(status, StatusCode::OK);
        let input: ProjectionInput = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(input, default_input());
    }

    #[tokio::test]
    async fn test_plans_endpoint() {
        let (status, bytes) = get_bytes("/api/plans").await;
        assert_eq!(status, StatusCode::OK);
        let plans: Vec<SubscriptionPlan> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(plans, plan_catalogue());
        assert_eq!(plans.len(), 3);
        assert!(plans
            .iter()
            .any(|p| p.name == "Core Plan" && p.monthly_cost == 399.0));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, bytes) = get_bytes("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({"status": "ok"}));
    }
}
