//! Alert and emergency-care models served to the dashboard

use serde::{Deserialize, Serialize};

/// Kind of alert shown in the insights feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Recommendation,
    Achievement,
}

/// Display priority of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

/// Health alert or AI insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    /// Relative, human-readable time ("2 minutes ago")
    pub timestamp: String,
    pub priority: AlertPriority,
}

/// Whether a doctor can currently take an emergency patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
}

/// Nearby doctor listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub hospital: String,
    /// Kilometers from the requested location
    pub distance: f64,
    /// 0.0 - 5.0
    pub rating: f64,
    pub availability: Availability,
    pub phone: String,
    pub address: String,
}
