//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. It is read-only
//! after startup; requests never share mutable data.

use crate::config::AppConfig;
use crate::services::{MetricsSource, SimulatedMetricsSource};
use std::sync::Arc;

/// Shared application state
///
/// All fields are behind `Arc`, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Where health readings come from
    pub metrics: Arc<dyn MetricsSource>,
}

impl AppState {
    /// Create state backed by the simulated metrics source
    ///
    /// Honors `simulation.seed` from the config for deterministic output.
    pub fn new(config: AppConfig) -> Self {
        let source = match config.simulation.seed {
            Some(seed) => SimulatedMetricsSource::seeded(seed),
            None => SimulatedMetricsSource::new(),
        };
        Self::with_metrics_source(config, source)
    }

    /// Create state with a custom metrics source
    pub fn with_metrics_source(config: AppConfig, source: impl MetricsSource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(source),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the metrics source
    #[inline]
    pub fn metrics(&self) -> &dyn MetricsSource {
        self.metrics.as_ref()
    }
}
