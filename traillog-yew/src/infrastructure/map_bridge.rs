use traillog_core::{ActivityKind, Coordinates, MapView};
use yew::Callback;

/// One instruction for the attached map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum MapDirective {
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

/// Map adapter that forwards every directive to a callback.
///
/// The embedding page subscribes the actual widget (Leaflet or any other
/// interactive map) to this callback and feeds clicks back to the session
/// through the click handle it receives from the provider.
pub struct CallbackMap {
    sink: Callback<MapDirective>,
}

impl CallbackMap {
    pub fn new(sink: Callback<MapDirective>) -> Self {
        Self { sink }
    }
}

impl MapView for CallbackMap {
    fn center_on(&mut self, coordinates: Coordinates, zoom: u8) {
        self.sink.emit(MapDirective::CenterOn { coordinates, zoom });
    }

    fn fly_to(&mut self, coordinates: Coordinates, zoom: u8) {
        self.sink.emit(MapDirective::FlyTo { coordinates, zoom });
    }

    fn place_marker(&mut self, coordinates: Coordinates, label: &str, kind: ActivityKind) {
        self.sink.emit(MapDirective::PlaceMarker {
            coordinates,
            label: label.to_string(),
            kind,
        });
    }
}
