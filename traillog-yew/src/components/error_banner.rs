use crate::hooks::use_session;
use traillog_core::{SessionEvent, SessionPhase};
use yew::prelude::*;

/// Visible, non-fatal error surface.
///
/// Shows the permanent location failure for the session, or the outcome of
/// the last rejected command.
#[function_component(ErrorBanner)]
pub fn error_banner() -> Html {
    let session = use_session();

    let message = if session.phase == SessionPhase::LocationDenied {
        Some("Could not determine your position. The map is unavailable for this session.".to_string())
    } else {
        match &session.last_event {
            Some(SessionEvent::SubmitRejected { reason }) => {
                Some(format!("Cannot log activity: {}", reason))
            }
            Some(SessionEvent::CommandFailed { reason, .. }) => Some(reason.clone()),
            _ => None,
        }
    };

    match message {
        Some(message) => html! {
            <div class="traillog-error-banner" role="alert">{message}</div>
        },
        None => html! {},
    }
}
