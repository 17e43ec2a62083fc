//! Fixed alert and doctor listings
//!
//! Stand-in for the insights engine and the provider directory. The
//! content is literal and identical for every caller.

use bodysense_shared::{Alert, AlertPriority, AlertType, Availability, Doctor, DoctorsQuery};
use tracing::debug;

/// Fallback coordinates when the client sends none (New York City)
pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.0060;

/// Mock catalog service
pub struct CatalogService;

impl CatalogService {
    /// Current alerts and AI insights, most recent first
    pub fn health_alerts() -> Vec<Alert> {
        vec![
            Alert {
                id: "1".to_string(),
                alert_type: AlertType::Recommendation,
                title: "Hydration Reminder".to_string(),
                message: "Your water intake is below the recommended 2L daily goal.".to_string(),
                timestamp: "2 minutes ago".to_string(),
                priority: AlertPriority::Medium,
            },
            Alert {
                id: "2".to_string(),
                alert_type: AlertType::Achievement,
                title: "Sleep Goal Achieved!".to_string(),
                message: "Great job! You've maintained 7+ hours of sleep for 5 consecutive nights."
                    .to_string(),
                timestamp: "1 hour ago".to_string(),
                priority: AlertPriority::Low,
            },
        ]
    }

    /// Doctors near the given location.
    ///
    /// The location is recorded for diagnostics only; the listing does not
    /// depend on it.
    pub fn emergency_doctors(location: &DoctorsQuery) -> Vec<Doctor> {
        debug!(
            lat = location.lat.as_deref().unwrap_or("default"),
            lng = location.lng.as_deref().unwrap_or("default"),
            default_lat = DEFAULT_LATITUDE,
            default_lng = DEFAULT_LONGITUDE,
            "Emergency doctor lookup"
        );

        vec![
            Doctor {
                id: "1".to_string(),
                name: "Dr. Sarah Johnson".to_string(),
                specialty: "Cardiology".to_string(),
                hospital: "City Medical Center".to_string(),
                distance: 0.8,
                rating: 4.9,
                availability: Availability::Available,
                phone: "+1 (555) 123-4567".to_string(),
                address: "123 Medical Drive, Downtown".to_string(),
            },
            Doctor {
                id: "2".to_string(),
                name: "Dr. Michael Chen".to_string(),
                specialty: "Emergency Medicine".to_string(),
                hospital: "General Hospital".to_string(),
                distance: 1.2,
                rating: 4.8,
                availability: Availability::Available,
                phone: "+1 (555) 987-6543".to_string(),
                address: "456 Health Street, Midtown".to_string(),
            },
        ]
    }
}
