pub mod activity;
pub mod activity_log;

pub use activity::{
    Activity, ActivityError, ActivityId, ActivityKind, Coordinates, SportMetrics,
};
pub use activity_log::ActivityLog;
