//! Health metrics data source
//!
//! Handlers never generate readings themselves; they ask a `MetricsSource`.
//! The only implementation today simulates a wearable by sampling uniformly
//! from the documented ranges. A real device or database backend can be
//! slotted in through `AppState::with_metrics_source` without touching the
//! route contracts.

use anyhow::{anyhow, Result};
use bodysense_shared::health_metrics::{self, snapshot, trend};
use bodysense_shared::{HealthMetrics, TrendPoint};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Source of current readings and hourly trends
pub trait MetricsSource: Send + Sync {
    /// Snapshot of the user's current metrics
    fn current_metrics(&self) -> Result<HealthMetrics>;

    /// `hours` hourly points labelled "00:00" upwards.
    ///
    /// A zero or negative count yields an empty series.
    fn trend(&self, hours: i64) -> Result<Vec<TrendPoint>>;
}

/// Wall clock used to stamp readings
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real UTC time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Uniform random readings within the documented ranges
///
/// With a seed, every call starts from a freshly seeded `StdRng`, so the
/// source is fully deterministic and keeps no state between requests.
#[derive(Clone)]
pub struct SimulatedMetricsSource {
    seed: Option<u64>,
    clock: Arc<dyn Clock>,
}

impl SimulatedMetricsSource {
    /// Thread-local RNG and the system clock
    pub fn new() -> Self {
        Self {
            seed: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Deterministic source: identical output for every call
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn sample_metrics<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> HealthMetrics {
        let sleep_hours = health_metrics::clamp_to(
            health_metrics::round_to_tenth(rng.gen_range(snapshot::SLEEP_HOURS)),
            &snapshot::SLEEP_HOURS,
        );

        HealthMetrics {
            heart_rate: rng.gen_range(snapshot::HEART_RATE),
            blood_oxygen: rng.gen_range(snapshot::BLOOD_OXYGEN),
            steps: rng.gen_range(snapshot::STEPS),
            calories: rng.gen_range(snapshot::CALORIES),
            sleep_hours,
            stress_level: rng.gen_range(snapshot::STRESS_LEVEL),
            water_intake: rng.gen_range(snapshot::WATER_INTAKE),
            timestamp: now,
        }
    }

    /// Fails instead of aborting when the series cannot be allocated
    fn sample_trend<R: Rng>(rng: &mut R, hours: i64) -> Result<Vec<TrendPoint>> {
        let count = usize::try_from(hours).unwrap_or(0);

        let mut points = Vec::new();
        points
            .try_reserve_exact(count)
            .map_err(|err| anyhow!("cannot allocate {count} trend points: {err}"))?;

        points.extend((0..count).map(|index| TrendPoint {
            time: health_metrics::hour_label(index),
            heart_rate: rng.gen_range(trend::HEART_RATE),
            blood_oxygen: rng.gen_range(trend::BLOOD_OXYGEN),
            steps: rng.gen_range(trend::STEPS),
            stress_level: rng.gen_range(trend::STRESS_LEVEL),
        }));

        Ok(points)
    }
}

impl Default for SimulatedMetricsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SimulatedMetricsSource {
    fn current_metrics(&self) -> Result<HealthMetrics> {
        let now = self.clock.now();
        let metrics = match self.seed {
            Some(seed) => Self::sample_metrics(&mut StdRng::seed_from_u64(seed), now),
            None => Self::sample_metrics(&mut rand::thread_rng(), now),
        };
        Ok(metrics)
    }

    fn trend(&self, hours: i64) -> Result<Vec<TrendPoint>> {
        match self.seed {
            Some(seed) => Self::sample_trend(&mut StdRng::seed_from_u64(seed), hours),
            None => Self::sample_trend(&mut rand::thread_rng(), hours),
        }
    }
}
