//! Business logic services
//!
//! Services produce the payloads handlers wrap in the response envelope.

pub mod catalog;
pub mod metrics;

pub use catalog::CatalogService;
pub use metrics::{Clock, FixedClock, MetricsSource, SimulatedMetricsSource, SystemClock};
