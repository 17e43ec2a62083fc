//! Service status endpoints
//!
//! - / - Service identity, doubles as a liveness check
//! - fallback - JSON 404 for unknown paths

use crate::error::ApiError;
use axum::Json;
use bodysense_shared::ServiceInfo;

/// Public API version, independent of the crate version
pub const API_VERSION: &str = "1.0.0";

/// GET / - Service identity
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "BodySense AI API is running".to_string(),
        version: API_VERSION.to_string(),
        status: "healthy".to_string(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
