use crate::domain::{Activity, ActivityError, ActivityLog};
use crate::infrastructure::{ActivityRecord, KeyValueStore, StoreError};

/// Fixed key the whole collection is stored under.
pub const STORAGE_KEY: &str = "traillog.activities";

/// Persistence adapter: round-trips the activity log through a key-value
/// store as a single JSON blob.
#[derive(Debug)]
pub struct ActivityStore<S: KeyValueStore> {
    store: S,
}

/// Errors while restoring persisted state.
///
/// Callers treat any of these as "no prior state": a failed restore
/// degrades to an empty log, it never crashes the session.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("stored activity data is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    #[error("stored activity record is invalid: {0}")]
    InvalidRecord(#[from] ActivityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<S: KeyValueStore> ActivityStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize the full collection and write it under [`STORAGE_KEY`],
    /// overwriting any prior value.
    pub fn save(&mut self, log: &ActivityLog) -> Result<(), StoreError> {
        let records: Vec<ActivityRecord> = log.iter().map(ActivityRecord::from).collect();
        let blob = serde_json::to_string(&records)?;
        self.store.set(STORAGE_KEY, &blob)?;
        tracing::debug!(count = records.len(), "persisted activity log");
        Ok(())
    }

    /// Load the persisted collection. A missing key yields an empty log,
    /// not an error; unparseable or invalid data yields [`RestoreError`].
    pub fn load(&self) -> Result<ActivityLog, RestoreError> {
        let blob = match self.store.get(STORAGE_KEY)? {
            Some(blob) => blob,
            None => return Ok(ActivityLog::new()),
        };

        let records: Vec<ActivityRecord> = serde_json::from_str(&blob)?;

        let mut log = ActivityLog::new();
        for record in records {
            log.push(Activity::try_from(record)?);
        }
        Ok(log)
    }

    /// Delete the persisted blob. Destructive and idempotent; there is no
    /// soft-delete.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.remove(STORAGE_KEY)
    }
}
