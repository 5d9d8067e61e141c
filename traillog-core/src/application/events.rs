use crate::domain::{Activity, ActivityError, ActivityId, ActivityKind, Coordinates};

/// Events emitted by the controller after processing a command.
///
/// The frontend consumes these to drive visible messages and re-renders.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The map was centered on the user's position and restored markers
    /// were replayed
    MapInitialized { center: Coordinates },

    /// Geolocation failed; map-dependent features stay blocked for this
    /// session
    LocationUnavailable,

    /// A map click opened the form for the given location
    FormOpened { coordinates: Coordinates },

    /// The form switched input groups
    KindSelected { kind: ActivityKind },

    /// A new activity was validated, rendered, and persisted
    ActivityLogged { activity: Activity },

    /// The submission failed validation; nothing was mutated
    SubmitRejected { reason: ActivityError },

    /// A list-entry click panned the map to its activity
    EntryFocused { id: ActivityId },

    /// Persisted and in-memory state were wiped
    SessionReset,

    /// Command arrived in a phase where it has no meaning
    CommandFailed { command: String, reason: String },
}
