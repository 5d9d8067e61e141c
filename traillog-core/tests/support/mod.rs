use std::cell::RefCell;
use std::rc::Rc;
use traillog_core::{ActivityKind, Coordinates, KeyValueStore, MapView, MemoryStore, StoreError};

/// One call the controller made on the map contract.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    CenterOn {
        coordinates: Coordinates,
        zoom: u8,
    },
    FlyTo {
        coordinates: Coordinates,
        zoom: u8,
    },
    PlaceMarker {
        coordinates: Coordinates,
        label: String,
        kind: ActivityKind,
    },
}

/// Mock map widget that records every directive.
///
/// The controller takes the map by value, so the test keeps a shared handle
/// to the call list.
#[derive(Clone, Default)]
pub struct RecordingMap {
    calls: Rc<RefCell<Vec<MapCall>>>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.borrow().clone()
    }

    pub fn markers(&self) -> Vec<MapCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, MapCall::PlaceMarker { .. }))
            .cloned()
            .collect()
    }
}

impl MapView for RecordingMap {
    fn center_on(&mut self, coordinates: Coordinates, zoom: u8) {
        self.calls
            .borrow_mut()
            .push(MapCall::CenterOn { coordinates, zoom });
    }

    fn fly_to(&mut self, coordinates: Coordinates, zoom: u8) {
        self.calls
            .borrow_mut()
            .push(MapCall::FlyTo { coordinates, zoom });
    }

    fn place_marker(&mut self, coordinates: Coordinates, label: &str, kind: ActivityKind) {
        self.calls.borrow_mut().push(MapCall::PlaceMarker {
            coordinates,
            label: label.to_string(),
            kind,
        });
    }
}

/// Key-value store whose backing map outlives the controller, so a second
/// controller can reload what the first one persisted.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<MemoryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().remove(key)
    }
}
