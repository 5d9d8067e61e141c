use crate::infrastructure::MapDirective;
use crate::pages::SessionScreen;
use crate::providers::SessionProvider;
use traillog_core::Coordinates;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Directives for the map widget the embedding page attached.
    pub map_sink: Callback<MapDirective>,

    /// Receives the handle for delivering map clicks into the session.
    #[prop_or_default]
    pub on_click_handle: Callback<Callback<Coordinates>>,
}

/// Root component: the session provider around the sidebar screen.
///
/// The map widget itself lives outside the component tree; the embedding
/// page consumes `map_sink` directives and feeds clicks back through the
/// click handle.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div class="traillog-app">
            <SessionProvider
                map_sink={props.map_sink.clone()}
                on_click_handle={props.on_click_handle.clone()}
            >
                <SessionScreen />
            </SessionProvider>
        </div>
    }
}

/// Install the WASM tracing subscriber. Call once before mounting the app.
pub fn init_logging() {
    tracing_wasm::set_as_global_default();
}
