//! Common test utilities for integration tests
//!
//! Drives the full router, middleware included, without binding a socket.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use bodysense_backend::{
    config::AppConfig,
    routes,
    services::{FixedClock, SimulatedMetricsSource},
    state::AppState,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Application backed by the unseeded simulated source
    pub fn new() -> Self {
        Self::from_state(AppState::new(test_config()))
    }

    /// Application whose readings are identical on every request
    pub fn seeded(seed: u64) -> Self {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap());
        let source = SimulatedMetricsSource::seeded(seed).with_clock(clock);
        Self::from_state(AppState::with_metrics_source(test_config(), source))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send an arbitrary request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: bodysense_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        debug: true,
        simulation: bodysense_backend::config::SimulationConfig::default(),
    }
}
