pub mod activity_store;
pub mod map;
pub mod memory_store;
pub mod record;
pub mod store;

pub use activity_store::{ActivityStore, RestoreError, STORAGE_KEY};
pub use map::{MapView, DEFAULT_ZOOM};
pub use memory_store::MemoryStore;
pub use record::{ActivityRecord, SportRecord};
pub use store::{KeyValueStore, StoreError};
