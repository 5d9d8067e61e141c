use crate::domain::{
    Activity, ActivityError, ActivityId, ActivityKind, Coordinates,
};

/// Commands the session controller processes, one at a time, to completion.
///
/// Geolocation results and map clicks arrive here as explicit commands
/// rather than as callbacks wired into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// The geolocation request resolved with the user's position
    LocationAcquired { coordinates: Coordinates },

    /// The geolocation request failed or was denied
    LocationFailed,

    /// The user clicked a point on the map
    MapClicked { coordinates: Coordinates },

    /// The user switched the form between the run and ride input groups
    KindSelected { kind: ActivityKind },

    /// The user submitted the form
    SubmitActivity { draft: ActivityDraft },

    /// The user clicked an existing list entry
    EntryClicked { id: ActivityId },

    /// Full reset: wipe persisted state and start over
    Reset,
}

/// Raw form submission, as parsed by the form surface.
///
/// Numeric fields carry whatever the inputs parsed to (unparseable text
/// becomes NaN), so the uniform domain validation is the single gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityDraft {
    Run {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Ride {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl ActivityDraft {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityDraft::Run { .. } => ActivityKind::Run,
            ActivityDraft::Ride { .. } => ActivityKind::Ride,
        }
    }

    /// Validate the draft and construct the activity at the given location.
    pub fn into_activity(self, coordinates: Coordinates) -> Result<Activity, ActivityError> {
        match self {
            ActivityDraft::Run {
                distance_km,
                duration_min,
                cadence_spm,
            } => {
                let cadence = cadence_as_count(cadence_spm)?;
                Activity::run(coordinates, distance_km, duration_min, cadence)
            }
            ActivityDraft::Ride {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Activity::ride(coordinates, distance_km, duration_min, elevation_gain_m),
        }
    }
}

/// Cadence is a positive whole number of steps per minute.
fn cadence_as_count(value: f64) -> Result<u32, ActivityError> {
    if !value.is_finite() {
        return Err(ActivityError::NotFinite("cadence"));
    }
    if value <= 0.0 {
        return Err(ActivityError::NotPositive("cadence"));
    }
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(ActivityError::NotInteger("cadence"));
    }
    Ok(value as u32)
}
