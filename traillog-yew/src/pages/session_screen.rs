use crate::components::{ActivityForm, ActivityList, ErrorBanner};
use crate::hooks::use_session;
use traillog_core::{SessionCommand, SessionPhase};
use yew::prelude::*;

/// The sidebar next to the map: error surface, entry form while a map click
/// is pending, the activity list, and the reset control.
#[function_component(SessionScreen)]
pub fn session_screen() -> Html {
    let session = use_session();

    let on_reset = {
        let send_command = session.send_command.clone();
        Callback::from(move |_: MouseEvent| {
            send_command(SessionCommand::Reset);
            reload_page();
        })
    };

    let form_open = matches!(session.phase, SessionPhase::FormOpen { .. });

    html! {
        <div class="traillog-session">
            <ErrorBanner />
            {if form_open {
                html! { <ActivityForm /> }
            } else {
                html! {}
            }}
            <ActivityList />
            <button class="traillog-reset" onclick={on_reset}>
                {"Clear all activities"}
            </button>
        </div>
    }
}

/// Restart the session from scratch after a reset.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
