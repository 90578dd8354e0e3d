use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CsrfFieldProps {
    pub token: Option<AttrValue>,
}

/// Django's CSRF token, when the host page provided one
#[function_component(CsrfField)]
pub fn csrf_field(props: &CsrfFieldProps) -> Html {
    match &props.token {
        Some(token) => html! {
            <input type="hidden" name="csrfmiddlewaretoken" value={token.clone()} />
        },
        None => html! {},
    }
}
