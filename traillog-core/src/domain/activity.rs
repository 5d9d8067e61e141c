use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Activity ID (unique within the session's log)
pub type ActivityId = Uuid;

/// A point on the map selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Discriminant distinguishing the two activity kinds.
///
/// Persisted records carry this tag so the correct variant (and its derived
/// metrics) can be reconstructed on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ActivityKind {
    Run,
    Ride,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Run => write!(f, "Run"),
            ActivityKind::Ride => write!(f, "Ride"),
        }
    }
}

/// Kind-specific payload: the field the user entered plus the metric
/// derived from it at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SportMetrics {
    Run {
        /// Steps per minute
        cadence_spm: u32,
        /// min/km, `duration_min / distance_km`
        pace_min_per_km: f64,
    },
    Ride {
        /// Total climb in meters (zero allowed)
        elevation_gain_m: f64,
        /// km/h, `distance_km / (duration_min / 60)`
        speed_kmh: f64,
    },
}

/// Errors that can occur when constructing an activity
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must be a whole number")]
    NotInteger(&'static str),

    #[error("elevation gain cannot be negative")]
    NegativeElevation,
}

/// One logged exercise entry (a run or a ride).
///
/// Created exactly once, at form submission, after validation passes; never
/// mutated afterwards. Derived fields (`label`, pace, speed) follow
/// deterministically from the constructor inputs and the creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique identifier, the sole lookup key for user interactions
    id: ActivityId,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// The map point the user selected
    coordinates: Coordinates,
    /// Distance in kilometers (> 0)
    distance_km: f64,
    /// Duration in minutes (> 0)
    duration_min: f64,
    /// Human-readable description, e.g. "Run on August 06"
    label: String,
    /// Kind-specific fields and derived metric
    metrics: SportMetrics,
}

impl Activity {
    /// Create a new run with a fresh ID and the current time.
    pub fn run(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Result<Self, ActivityError> {
        Self::run_with(
            Uuid::new_v4(),
            Utc::now(),
            coordinates,
            distance_km,
            duration_min,
            cadence_spm,
        )
    }

    /// Create a run with a specific ID and timestamp (for restoring
    /// persisted records). Re-runs validation and recomputes every derived
    /// field; persisted derived values are never trusted.
    pub fn run_with(
        id: ActivityId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Result<Self, ActivityError> {
        validate_positive("distance", distance_km)?;
        validate_positive("duration", duration_min)?;
        if cadence_spm == 0 {
            return Err(ActivityError::NotPositive("cadence"));
        }

        let metrics = SportMetrics::Run {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };

        Ok(Self::assemble(
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            metrics,
        ))
    }

    /// Create a new ride with a fresh ID and the current time.
    pub fn ride(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, ActivityError> {
        Self::ride_with(
            Uuid::new_v4(),
            Utc::now(),
            coordinates,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    /// Create a ride with a specific ID and timestamp (for restoring
    /// persisted records).
    pub fn ride_with(
        id: ActivityId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, ActivityError> {
        validate_positive("distance", distance_km)?;
        validate_positive("duration", duration_min)?;
        if !elevation_gain_m.is_finite() {
            return Err(ActivityError::NotFinite("elevation gain"));
        }
        if elevation_gain_m < 0.0 {
            return Err(ActivityError::NegativeElevation);
        }

        let metrics = SportMetrics::Ride {
            elevation_gain_m,
            speed_kmh: distance_km / (duration_min / 60.0),
        };

        Ok(Self::assemble(
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            metrics,
        ))
    }

    fn assemble(
        id: ActivityId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        metrics: SportMetrics,
    ) -> Self {
        let kind = match metrics {
            SportMetrics::Run { .. } => ActivityKind::Run,
            SportMetrics::Ride { .. } => ActivityKind::Ride,
        };
        let label = format!("{} on {}", kind, created_at.format("%B %d"));

        Activity {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            label,
            metrics,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn metrics(&self) -> SportMetrics {
        self.metrics
    }

    pub fn kind(&self) -> ActivityKind {
        match self.metrics {
            SportMetrics::Run { .. } => ActivityKind::Run,
            SportMetrics::Ride { .. } => ActivityKind::Ride,
        }
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ActivityError> {
    if !value.is_finite() {
        return Err(ActivityError::NotFinite(field));
    }
    if value <= 0.0 {
        return Err(ActivityError::NotPositive(field));
    }
    Ok(())
}
