//! Health metric value shapes and their documented ranges
//!
//! Every generated reading must fall inside the inclusive range declared
//! here. Backends producing real data are expected to honor the same
//! bounds so clients can render gauges without clamping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ============================================================================
// Ranges
// ============================================================================

/// Inclusive ranges for a current-metrics snapshot
pub mod snapshot {
    use std::ops::RangeInclusive;

    /// Beats per minute
    pub const HEART_RATE: RangeInclusive<i32> = 60..=100;
    /// SpO2 percent
    pub const BLOOD_OXYGEN: RangeInclusive<i32> = 95..=100;
    pub const STEPS: RangeInclusive<i32> = 1000..=15000;
    /// Kilocalories
    pub const CALORIES: RangeInclusive<i32> = 300..=2500;
    /// Hours, rounded to one decimal place after sampling
    pub const SLEEP_HOURS: RangeInclusive<f64> = 6.0..=9.0;
    /// 0-100 stress scale
    pub const STRESS_LEVEL: RangeInclusive<i32> = 20..=80;
    /// Milliliters
    pub const WATER_INTAKE: RangeInclusive<i32> = 500..=3000;
}

/// Inclusive ranges for a single hourly trend point
pub mod trend {
    use std::ops::RangeInclusive;

    pub const HEART_RATE: RangeInclusive<i32> = 60..=120;
    pub const BLOOD_OXYGEN: RangeInclusive<i32> = 95..=100;
    /// Steps taken within the hour
    pub const STEPS: RangeInclusive<i32> = 0..=500;
    pub const STRESS_LEVEL: RangeInclusive<i32> = 20..=80;
}

// ============================================================================
// Value shapes
// ============================================================================

/// Point-in-time snapshot of a user's vitals and daily totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub heart_rate: i32,
    pub blood_oxygen: i32,
    pub steps: i32,
    pub calories: i32,
    pub sleep_hours: f64,
    pub stress_level: i32,
    pub water_intake: i32,
    pub timestamp: DateTime<Utc>,
}

impl HealthMetrics {
    /// Check every field against its snapshot range
    pub fn is_within_ranges(&self) -> bool {
        snapshot::HEART_RATE.contains(&self.heart_rate)
            && snapshot::BLOOD_OXYGEN.contains(&self.blood_oxygen)
            && snapshot::STEPS.contains(&self.steps)
            && snapshot::CALORIES.contains(&self.calories)
            && snapshot::SLEEP_HOURS.contains(&self.sleep_hours)
            && snapshot::STRESS_LEVEL.contains(&self.stress_level)
            && snapshot::WATER_INTAKE.contains(&self.water_intake)
    }
}

/// One hourly sample in a trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Hour label, e.g. "07:00"
    pub time: String,
    pub heart_rate: i32,
    pub blood_oxygen: i32,
    pub steps: i32,
    pub stress_level: i32,
}

impl TrendPoint {
    pub fn is_within_ranges(&self) -> bool {
        trend::HEART_RATE.contains(&self.heart_rate)
            && trend::BLOOD_OXYGEN.contains(&self.blood_oxygen)
            && trend::STEPS.contains(&self.steps)
            && trend::STRESS_LEVEL.contains(&self.stress_level)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Label for the hour at `index` in a trend series.
///
/// Zero-padded to two digits; indices past 99 keep all their digits.
pub fn hour_label(index: usize) -> String {
    format!("{:02}:00", index)
}

/// Round to one decimal place, half away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp a rounded value back into `range`
pub fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}
