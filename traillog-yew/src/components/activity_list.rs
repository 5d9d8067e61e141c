use crate::hooks::use_session;
use traillog_core::{ActivityKind, SessionCommand, SportMetrics};
use yew::prelude::*;

/// Displays logged activities, newest last.
///
/// Clicking an entry pans the map to its marker.
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let session = use_session();

    html! {
        <div class="traillog-activity-list">
            <h3 class="traillog-activity-list__title">{"Activities"}</h3>
            {if session.activities.is_empty() {
                html! {
                    <p class="traillog-activity-list__empty">{"No activities yet"}</p>
                }
            } else {
                html! {
                    <ul class="traillog-activity-list__items">
                        {for session.activities.iter().map(|activity| {
                            let id = activity.id();
                            let onclick = {
                                let send_command = session.send_command.clone();
                                Callback::from(move |_: MouseEvent| {
                                    send_command(SessionCommand::EntryClicked { id });
                                })
                            };

                            let (kind_class, kind_icon) = match activity.kind() {
                                ActivityKind::Run => ("run", "🏃"),
                                ActivityKind::Ride => ("ride", "🚴"),
                            };

                            let (metric, metric_unit, extra_icon, extra, extra_unit) =
                                match activity.metrics() {
                                    SportMetrics::Run {
                                        cadence_spm,
                                        pace_min_per_km,
                                    } => (
                                        format!("{:.1}", pace_min_per_km),
                                        "min/km",
                                        "🦶",
                                        cadence_spm.to_string(),
                                        "spm",
                                    ),
                                    SportMetrics::Ride {
                                        elevation_gain_m,
                                        speed_kmh,
                                    } => (
                                        format!("{:.1}", speed_kmh),
                                        "km/h",
                                        "⛰",
                                        elevation_gain_m.to_string(),
                                        "m",
                                    ),
                                };

                            html! {
                                <li
                                    key={id.to_string()}
                                    class={classes!("traillog-entry", kind_class)}
                                    data-id={id.to_string()}
                                    onclick={onclick}
                                >
                                    <h4 class="traillog-entry__title">{activity.label()}</h4>
                                    <div class="traillog-entry__details">
                                        <span class="traillog-entry__icon">{kind_icon}</span>
                                        <span class="traillog-entry__value">{activity.distance_km()}</span>
                                        <span class="traillog-entry__unit">{"km"}</span>
                                    </div>
                                    <div class="traillog-entry__details">
                                        <span class="traillog-entry__icon">{"⏱"}</span>
                                        <span class="traillog-entry__value">{activity.duration_min()}</span>
                                        <span class="traillog-entry__unit">{"min"}</span>
                                    </div>
                                    <div class="traillog-entry__details">
                                        <span class="traillog-entry__icon">{"⚡"}</span>
                                        <span class="traillog-entry__value">{metric}</span>
                                        <span class="traillog-entry__unit">{metric_unit}</span>
                                    </div>
                                    <div class="traillog-entry__details">
                                        <span class="traillog-entry__icon">{extra_icon}</span>
                                        <span class="traillog-entry__value">{extra}</span>
                                        <span class="traillog-entry__unit">{extra_unit}</span>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </div>
    }
}
