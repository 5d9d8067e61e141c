use traillog_core::{Coordinates, SessionCommand};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

/// One-shot geolocation request.
///
/// Dispatches `LocationAcquired` on success and `LocationFailed` when the
/// API is missing, the user denies the request, or the lookup errors. There
/// is no retry and no timeout beyond what the browser applies.
pub fn request_position(dispatch: Callback<SessionCommand>) {
    let geolocation = web_sys::window().and_then(|window| window.navigator().geolocation().ok());
    let geolocation = match geolocation {
        Some(geolocation) => geolocation,
        None => {
            tracing::warn!("geolocation API unavailable");
            dispatch.emit(SessionCommand::LocationFailed);
            return;
        }
    };

    let on_success = {
        let dispatch = dispatch.clone();
        Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            dispatch.emit(SessionCommand::LocationAcquired {
                coordinates: Coordinates::new(coords.latitude(), coords.longitude()),
            });
        })
    };

    let on_failure = {
        let dispatch = dispatch.clone();
        Closure::once(move |error: web_sys::PositionError| {
            tracing::warn!(code = error.code(), "geolocation request failed");
            dispatch.emit(SessionCommand::LocationFailed);
        })
    };

    let requested = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_failure.as_ref().unchecked_ref()),
    );

    match requested {
        Ok(()) => {
            // The browser owns the callbacks from here on.
            on_success.forget();
            on_failure.forget();
        }
        Err(err) => {
            tracing::warn!(?err, "geolocation request could not be issued");
            dispatch.emit(SessionCommand::LocationFailed);
        }
    }
}
