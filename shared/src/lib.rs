//! BodySense Shared Library
//!
//! This crate contains the transport types, metric ranges and validation
//! used by the backend and by clients of its JSON API.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::{HealthMetrics, TrendPoint};
pub use models::*;
pub use types::*;
