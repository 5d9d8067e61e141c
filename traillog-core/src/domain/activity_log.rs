use crate::domain::{Activity, ActivityId};

/// The ordered in-memory activity collection.
///
/// Insertion order is display order, newest last. The session controller is
/// the single writer; views only read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityLog {
    activities: Vec<Activity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        ActivityLog {
            activities: Vec::new(),
        }
    }

    /// Append an activity. An entry whose ID is already present is skipped,
    /// preserving the uniqueness invariant.
    pub fn push(&mut self, activity: Activity) {
        if self.activities.iter().any(|a| a.id() == activity.id()) {
            tracing::debug!(id = %activity.id(), "activity already logged, skipping");
            return;
        }
        self.activities.push(activity);
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Drop every entry. Only used by the full session reset.
    pub fn clear(&mut self) {
        self.activities.clear();
    }
}
