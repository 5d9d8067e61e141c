use crate::hooks::use_session;
use traillog_core::{ActivityDraft, ActivityKind, SessionCommand, SessionPhase};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Parse a raw input value. Unparseable text becomes NaN so the domain's
/// uniform validation is the single gate for every bad input.
fn parse_field(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn bind_input(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// The activity entry form: kind selector, distance, duration, and a fourth
/// input that toggles between cadence and elevation gain with the kind.
///
/// Rendered only while the session has a pending map click; unmounting on
/// successful submission is what clears and hides it.
#[function_component(ActivityForm)]
pub fn activity_form() -> Html {
    let session = use_session();

    let distance = use_state(String::new);
    let duration = use_state(String::new);
    let fourth = use_state(String::new);
    let distance_ref = use_node_ref();

    {
        let distance_ref = distance_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = distance_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let kind = match session.phase {
        SessionPhase::FormOpen { kind, .. } => kind,
        _ => ActivityKind::Run,
    };

    let on_kind_change = {
        let send_command = session.send_command.clone();
        let fourth = fourth.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let kind = if select.value() == "ride" {
                    ActivityKind::Ride
                } else {
                    ActivityKind::Run
                };
                fourth.set(String::new());
                send_command(SessionCommand::KindSelected { kind });
            }
        })
    };

    let on_submit = {
        let send_command = session.send_command.clone();
        let distance = distance.clone();
        let duration = duration.clone();
        let fourth = fourth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let distance_km = parse_field(&distance);
            let duration_min = parse_field(&duration);
            let draft = match kind {
                ActivityKind::Run => ActivityDraft::Run {
                    distance_km,
                    duration_min,
                    cadence_spm: parse_field(&fourth),
                },
                ActivityKind::Ride => ActivityDraft::Ride {
                    distance_km,
                    duration_min,
                    elevation_gain_m: parse_field(&fourth),
                },
            };

            send_command(SessionCommand::SubmitActivity { draft });
        })
    };

    let (fourth_label, fourth_placeholder) = match kind {
        ActivityKind::Run => ("Cadence", "step/min"),
        ActivityKind::Ride => ("Elev Gain", "meters"),
    };

    html! {
        <form class="traillog-form" onsubmit={on_submit}>
            <div class="traillog-form__row">
                <label class="traillog-form__label">{"Type"}</label>
                <select class="traillog-form__input" onchange={on_kind_change}>
                    <option value="run" selected={kind == ActivityKind::Run}>{"Running"}</option>
                    <option value="ride" selected={kind == ActivityKind::Ride}>{"Cycling"}</option>
                </select>
            </div>
            <div class="traillog-form__row">
                <label class="traillog-form__label">{"Distance"}</label>
                <input
                    ref={distance_ref}
                    class="traillog-form__input"
                    placeholder="km"
                    value={(*distance).clone()}
                    oninput={bind_input(distance.clone())}
                />
            </div>
            <div class="traillog-form__row">
                <label class="traillog-form__label">{"Duration"}</label>
                <input
                    class="traillog-form__input"
                    placeholder="min"
                    value={(*duration).clone()}
                    oninput={bind_input(duration.clone())}
                />
            </div>
            <div class="traillog-form__row">
                <label class="traillog-form__label">{fourth_label}</label>
                <input
                    class="traillog-form__input"
                    placeholder={fourth_placeholder}
                    value={(*fourth).clone()}
                    oninput={bind_input(fourth.clone())}
                />
            </div>
            <button class="traillog-form__submit" type="submit">{"OK"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_field("5"), 5.0);
        assert_eq!(parse_field(" 25.5 "), 25.5);
        assert_eq!(parse_field("-3"), -3.0);
    }

    #[test]
    fn garbage_becomes_nan() {
        assert!(parse_field("").is_nan());
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("5km").is_nan());
    }
}
