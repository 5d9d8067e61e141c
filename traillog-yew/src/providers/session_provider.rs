use crate::hooks::SessionContext;
use crate::infrastructure::{request_position, CallbackMap, LocalStorageStore, MapDirective};
use std::rc::Rc;
use traillog_core::{
    Activity, Coordinates, SessionCommand, SessionController, SessionEvent, SessionPhase,
};
use yew::prelude::*;

type Controller = SessionController<CallbackMap, LocalStorageStore>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Receives every directive for the attached map widget.
    pub map_sink: Callback<MapDirective>,

    /// Called once on mount with the handle the map adapter uses to deliver
    /// user clicks into the session.
    #[prop_or_default]
    pub on_click_handle: Callback<Callback<Coordinates>>,

    pub children: Children,
}

/// View-facing snapshot of the controller, refreshed after every command.
struct Snapshot {
    activities: Vec<Activity>,
    phase: SessionPhase,
    last_event: Option<SessionEvent>,
}

impl Snapshot {
    fn read(controller: &Controller, last_event: Option<SessionEvent>) -> Self {
        Self {
            activities: controller.activities().to_vec(),
            phase: controller.phase(),
            last_event,
        }
    }
}

/// Owns the session controller and exposes it to the component tree.
///
/// Restores persisted activities on mount (so the list renders before the
/// map is up), issues the one-shot geolocation request, and funnels every
/// user interaction through the controller as commands.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let controller = {
        let map_sink = props.map_sink.clone();
        use_mut_ref(move || {
            Controller::new(CallbackMap::new(map_sink), LocalStorageStore::new())
        })
    };

    let snapshot = {
        let controller = controller.clone();
        use_state(move || Snapshot::read(&controller.borrow(), None))
    };

    let send_command: Rc<dyn Fn(SessionCommand)> = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        Rc::new(move |command: SessionCommand| {
            tracing::debug!(?command, "session command");
            let event = controller.borrow_mut().handle_command(command);
            snapshot.set(Snapshot::read(&controller.borrow(), event));
        })
    };

    {
        let send_command = send_command.clone();
        let on_click_handle = props.on_click_handle.clone();
        use_effect_with((), move |_| {
            // Hand the map adapter its click channel.
            let clicks = {
                let send_command = send_command.clone();
                Callback::from(move |coordinates: Coordinates| {
                    send_command(SessionCommand::MapClicked { coordinates });
                })
            };
            on_click_handle.emit(clicks);

            // One-shot geolocation request; resolution drives the
            // AwaitingLocation transition.
            let dispatch = Callback::from(move |command: SessionCommand| {
                send_command(command);
            });
            request_position(dispatch);

            || ()
        });
    }

    let context = SessionContext {
        activities: snapshot.activities.clone(),
        phase: snapshot.phase,
        last_event: snapshot.last_event.clone(),
        send_command,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
