use super::forms::CsrfField;
use crate::services::logging::Logger;
use gloo::timers::future::TimeoutFuture;
use shared::presentation::store_closed_label;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

const COMPONENT: &str = "skip-day";

#[derive(Properties, PartialEq)]
pub struct SkipDayToggleProps {
    pub closed: bool,
    pub action: AttrValue,
    #[prop_or_default]
    pub csrf: Option<AttrValue>,
    pub submit_delay_ms: u32,
}

/// "Store closed" switch. Updates its label at once and posts its own form
/// shortly after.
#[function_component(SkipDayToggle)]
pub fn skip_day_toggle(props: &SkipDayToggleProps) -> Html {
    let closed = use_state(|| props.closed);
    let form_ref = use_node_ref();

    {
        let closed = closed.clone();
        use_effect_with(props.closed, move |value| {
            closed.set(*value);
            || ()
        });
    }

    let onchange = {
        let closed = closed.clone();
        let form_ref = form_ref.clone();
        let delay = props.submit_delay_ms;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            closed.set(input.checked());

            let form_ref = form_ref.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                match form_ref.cast::<HtmlFormElement>() {
                    Some(form) => {
                        if let Err(e) = form.submit() {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("submit failed: {:?}", e),
                            );
                        }
                    }
                    None => Logger::warn_with_component(COMPONENT, "form is gone, not submitting"),
                }
            });
        })
    };

    let (label, color) = store_closed_label(*closed);

    html! {
        <form ref={form_ref} method="post" action={props.action.clone()} class="toggle-fechado">
            <CsrfField token={props.csrf.clone()} />
            <input
                type="hidden"
                name="loja_fechada"
                value={if *closed { "true" } else { "false" }}
            />
            <label class="switch-label" for="check-fechado">
                <input
                    type="checkbox"
                    id="check-fechado"
                    checked={*closed}
                    onchange={onchange}
                />
                <span id="label-fechado" style={format!("color: {};", color)}>{label}</span>
            </label>
        </form>
    }
}
