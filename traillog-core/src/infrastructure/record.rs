use crate::domain::{Activity, ActivityError, ActivityId, ActivityKind, Coordinates};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Persisted shape of one activity.
///
/// Only base fields are stored; derived metrics (label, pace, speed) are
/// recomputed on load so they always follow deterministically from the base
/// fields. The `kind` tag inside [`SportRecord`] is what lets load rebuild
/// the correct variant instead of a behaviorless base shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityRecord {
    pub id: ActivityId,
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(flatten)]
    pub sport: SportRecord,
}

/// Kind-tagged payload of a persisted activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind")]
pub enum SportRecord {
    Run { cadence_spm: u32 },
    Ride { elevation_gain_m: f64 },
}

impl SportRecord {
    pub fn kind(&self) -> ActivityKind {
        match self {
            SportRecord::Run { .. } => ActivityKind::Run,
            SportRecord::Ride { .. } => ActivityKind::Ride,
        }
    }
}

impl From<&Activity> for ActivityRecord {
    fn from(activity: &Activity) -> Self {
        use crate::domain::SportMetrics;

        let sport = match activity.metrics() {
            SportMetrics::Run { cadence_spm, .. } => SportRecord::Run { cadence_spm },
            SportMetrics::Ride {
                elevation_gain_m, ..
            } => SportRecord::Ride { elevation_gain_m },
        };

        ActivityRecord {
            id: activity.id(),
            created_at: activity.created_at(),
            coordinates: activity.coordinates(),
            distance_km: activity.distance_km(),
            duration_min: activity.duration_min(),
            sport,
        }
    }
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = ActivityError;

    /// Dispatch on the kind tag and rebuild the matching variant, re-running
    /// validation and recomputing derived fields.
    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        match record.sport {
            SportRecord::Run { cadence_spm } => Activity::run_with(
                record.id,
                record.created_at,
                record.coordinates,
                record.distance_km,
                record.duration_min,
                cadence_spm,
            ),
            SportRecord::Ride { elevation_gain_m } => Activity::ride_with(
                record.id,
                record.created_at,
                record.coordinates,
                record.distance_km,
                record.duration_min,
                elevation_gain_m,
            ),
        }
    }
}
