use crate::domain::{ActivityKind, Coordinates};

/// Zoom level used for the initial view and for pan-to-activity.
pub const DEFAULT_ZOOM: u8 = 13;

/// Contract for the interactive map widget (allows mocking in tests).
///
/// The widget itself is an external collaborator; any implementation
/// satisfying this trait is substitutable. User clicks on the map are not
/// part of the trait; the adapter that owns the widget delivers them to
/// the controller as `SessionCommand::MapClicked`.
pub trait MapView {
    /// Jump the viewport to the given point.
    fn center_on(&mut self, coordinates: Coordinates, zoom: u8);

    /// Animated transition to the given point.
    fn fly_to(&mut self, coordinates: Coordinates, zoom: u8);

    /// Drop a marker with a popup carrying the activity label. The kind is
    /// passed so adapters can style the popup per activity kind.
    fn place_marker(&mut self, coordinates: Coordinates, label: &str, kind: ActivityKind);
}
