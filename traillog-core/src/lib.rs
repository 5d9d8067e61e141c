//! Traillog core: activity domain model, persistence, and the session
//! controller.
//!
//! The crate is UI-agnostic: the map widget, the form surface, the
//! geolocation provider, and the key-value store are collaborators consumed
//! through contracts, so the whole session can be driven natively in tests
//! with in-memory stand-ins.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ActivityDraft, SessionCommand, SessionController, SessionEvent, SessionPhase};
pub use domain::{
    Activity, ActivityError, ActivityId, ActivityKind, ActivityLog, Coordinates, SportMetrics,
};
pub use infrastructure::{
    ActivityRecord, ActivityStore, KeyValueStore, MapView, MemoryStore, RestoreError, SportRecord,
    StoreError, DEFAULT_ZOOM, STORAGE_KEY,
};
