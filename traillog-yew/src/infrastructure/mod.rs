pub mod geolocation;
pub mod local_storage;
pub mod map_bridge;

pub use geolocation::request_position;
pub use local_storage::LocalStorageStore;
pub use map_bridge::{CallbackMap, MapDirective};
