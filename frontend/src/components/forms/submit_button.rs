use crate::hooks::BusyState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub busy: Option<BusyState>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Submit button that turns into a fixed-width spinner while the form is sent
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    match props.busy {
        Some(busy) => {
            let style = match busy.width {
                Some(width) => format!("opacity: 0.7; width: {}px;", width),
                None => "opacity: 0.7;".to_string(),
            };
            html! {
                <button type="submit" class={classes!("btn", props.class.clone())} disabled=true style={style}>
                    <i class="fas fa-spinner fa-spin"></i>
                </button>
            }
        }
        None => html! {
            <button type="submit" class={classes!("btn", props.class.clone())}>
                { for props.children.iter() }
            </button>
        },
    }
}
