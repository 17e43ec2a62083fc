//! Health data API routes

use crate::error::{ApiError, ApiResult};
use crate::services::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use bodysense_shared::validation::validate_required_fields;
use bodysense_shared::{Alert, ApiResponse, HealthMetrics, TrendPoint, TrendsQuery};
use serde_json::Value;
use tracing::{debug, info};

/// Hours of trend data returned when the client does not ask for a count
pub const DEFAULT_TREND_HOURS: i64 = 24;

/// Create health data routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(get_metrics).post(save_metrics))
        .route("/trends", get(get_trends))
        .route("/alerts", get(get_alerts))
}

/// Parse the `hours` query value, defaulting when absent.
///
/// Surrounding whitespace and a leading sign are accepted.
fn parse_hours(raw: Option<&str>) -> ApiResult<i64> {
    match raw {
        None => Ok(DEFAULT_TREND_HOURS),
        Some(value) => value.trim().parse().map_err(|_| ApiError::InvalidQuery {
            name: "hours",
            value: value.to_string(),
        }),
    }
}

/// GET /api/health/metrics - Current metrics snapshot
async fn get_metrics(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<HealthMetrics>>> {
    let metrics = state.metrics().current_metrics()?;
    Ok(Json(ApiResponse::ok(metrics)))
}

/// GET /api/health/trends?hours=N - Hourly trend series
async fn get_trends(
    State(state): State<AppState>,
    query: Result<Query<TrendsQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<TrendPoint>>>> {
    let Query(query) = query?;
    let hours = parse_hours(query.hours.as_deref())?;

    debug!(hours, "Generating trend series");
    let points = state.metrics().trend(hours)?;

    Ok(Json(ApiResponse::ok(points)))
}

/// GET /api/health/alerts - Alerts and AI insights
async fn get_alerts() -> Json<ApiResponse<Vec<Alert>>> {
    Json(ApiResponse::ok(CatalogService::health_alerts()))
}

/// POST /api/health/metrics - Accept a metrics submission from a wearable
///
/// Only checks that the required fields are present, then echoes the body
/// back. Nothing is stored. Arrays and strings are checked by membership
/// rather than rejected.
async fn save_metrics(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let Json(body) = payload?;

    validate_required_fields(&body)?;
    if let Value::Object(fields) = &body {
        info!(fields = fields.len(), "Health metrics submission accepted");
    } else {
        info!("Health metrics submission accepted from non-object body");
    }

    Ok(Json(ApiResponse::ok_with_message(
        "Health metrics saved successfully",
        body,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::{FixedClock, MetricsSource, SimulatedMetricsSource};
    use axum::response::IntoResponse;
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn seeded_state() -> AppState {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        AppState::with_metrics_source(
            AppConfig::default(),
            SimulatedMetricsSource::seeded(5).with_clock(clock),
        )
    }

    /// Source that always fails, standing in for an unreachable backend
    struct OfflineSource;

    impl MetricsSource for OfflineSource {
        fn current_metrics(&self) -> anyhow::Result<HealthMetrics> {
            anyhow::bail!("wearable sync unavailable")
        }

        fn trend(&self, _hours: i64) -> anyhow::Result<Vec<TrendPoint>> {
            anyhow::bail!("wearable sync unavailable")
        }
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours(None).unwrap(), 24);
        assert_eq!(parse_hours(Some("6")).unwrap(), 6);
        assert_eq!(parse_hours(Some(" 12 ")).unwrap(), 12);
        assert_eq!(parse_hours(Some("+3")).unwrap(), 3);
        assert_eq!(parse_hours(Some("-2")).unwrap(), -2);
    }

    #[test]
    fn test_parse_hours_rejects_non_integers() {
        for raw in ["abc", "", "1.5", "12h"] {
            let err = parse_hours(Some(raw)).unwrap_err();
            assert!(matches!(err, ApiError::InvalidQuery { name: "hours", .. }));
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_get_metrics_wraps_source_output() {
        let state = seeded_state();
        let expected = state.metrics().current_metrics().unwrap();

        let Json(response) = get_metrics(State(state)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(expected));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_source_failure_becomes_internal_error() {
        let state = AppState::with_metrics_source(AppConfig::default(), OfflineSource);

        let err = get_metrics(State(state.clone())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "wearable sync unavailable");

        let err = get_trends(State(state), Ok(Query(TrendsQuery::default())))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_trends_default_hours() {
        let Json(response) = get_trends(State(seeded_state()), Ok(Query(TrendsQuery::default())))
            .await
            .unwrap();
        let points = response.data.unwrap();
        assert_eq!(points.len(), 24);
        assert_eq!(points[23].time, "23:00");
    }

    #[tokio::test]
    async fn test_save_metrics_echoes_body() {
        let body = json!({ "heartRate": 70, "bloodOxygen": 98, "steps": 5000 });

        let Json(response) = save_metrics(Ok(Json(body.clone()))).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Health metrics saved successfully"));
        assert_eq!(response.data, Some(body));
    }

    #[tokio::test]
    async fn test_save_metrics_missing_field() {
        let err = save_metrics(Ok(Json(json!({ "heartRate": 70 }))))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required field: bloodOxygen");
    }

    #[tokio::test]
    async fn test_save_metrics_checks_arrays_and_strings_by_membership() {
        for body in [json!([1, 2, 3]), json!("abc")] {
            let err = save_metrics(Ok(Json(body))).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "Missing required field: heartRate");
        }

        let body = json!(["heartRate", "bloodOxygen", "steps"]);
        let Json(response) = save_metrics(Ok(Json(body.clone()))).await.unwrap();
        assert_eq!(response.data, Some(body));
    }

    #[tokio::test]
    async fn test_save_metrics_rejects_scalar_bodies() {
        for body in [json!(null), json!(42), json!(false)] {
            let err = save_metrics(Ok(Json(body))).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
