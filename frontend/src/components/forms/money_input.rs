use crate::services::safe_submit::MASK_CLASS;
use shared::currency::{mask_digits, normalize_server_value};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MoneyInputProps {
    pub id: AttrValue,
    pub name: AttrValue,
    /// Value as rendered by the server (`1500.50`); masked on display
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onblur: Option<Callback<FocusEvent>>,
}

fn initial_display(value: &str) -> String {
    mask_digits(&normalize_server_value(value)).unwrap_or_default()
}

/// Text input showing a Brazilian currency mask while typing.
#[function_component(MoneyInput)]
pub fn money_input(props: &MoneyInputProps) -> Html {
    let display = use_state(|| initial_display(&props.value));

    // A new snapshot brings a new value
    {
        let display = display.clone();
        use_effect_with(props.value.clone(), move |value| {
            display.set(initial_display(value));
            || ()
        });
    }

    let oninput = {
        let display = display.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match mask_digits(&input.value()) {
                Some(masked) => {
                    input.set_value(&masked);
                    display.set(masked);
                }
                None => display.set(input.value()),
            }
        })
    };

    let onfocus = Callback::from(|e: FocusEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.select();
    });

    let live = !props.readonly;

    html! {
        <input
            type="text"
            inputmode="numeric"
            autocomplete="off"
            placeholder="0,00"
            id={props.id.clone()}
            name={props.name.clone()}
            class={classes!("form-control", MASK_CLASS, props.class.clone())}
            value={(*display).clone()}
            readonly={props.readonly}
            oninput={live.then_some(oninput)}
            onfocus={live.then_some(onfocus)}
            onblur={props.onblur.clone()}
        />
    }
}
