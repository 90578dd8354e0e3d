use super::forms::{CsrfField, MoneyInput, SubmitButton};
use crate::hooks::use_safe_submit;
use gloo::timers::future::TimeoutFuture;
use shared::Balances;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalancesFormProps {
    pub balances: Balances,
    pub action: AttrValue,
    #[prop_or_default]
    pub csrf: Option<AttrValue>,
    /// Debounce before the closing balance saves itself on blur
    pub autosave_delay_ms: u32,
}

/// Opening/closing balance form. The closing balance saves on blur.
#[function_component(BalancesForm)]
pub fn balances_form(props: &BalancesFormProps) -> Html {
    let submit = use_safe_submit();

    let on_closing_blur = {
        let guard = submit.guard.clone();
        let submit = submit.submit.clone();
        let delay = props.autosave_delay_ms;
        Callback::from(move |_: FocusEvent| {
            let guard = guard.clone();
            let submit = submit.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                if !guard.is_submitting() {
                    submit.emit(());
                }
            });
        })
    };

    html! {
        <form
            id="form-saldos"
            ref={submit.form_ref.clone()}
            method="post"
            action={props.action.clone()}
            class="card-saldos"
            onsubmit={submit.onsubmit.clone()}
        >
            <CsrfField token={props.csrf.clone()} />
            // form.submit() sends no submitter, so the button's name travels as a field
            <input type="hidden" name="btn_saldos" value="1" />

            <div class="saldo-row">
                <label for="id_saldo_inicial">{"Saldo inicial"}</label>
                <MoneyInput
                    id="id_saldo_inicial"
                    name="saldo_inicial"
                    value={format!("{:.2}", props.balances.opening)}
                    readonly=true
                />
            </div>

            <div class="saldo-row">
                <label for="id_saldo_final">{"Saldo final"}</label>
                <MoneyInput
                    id="id_saldo_final"
                    name="saldo_final"
                    value={format!("{:.2}", props.balances.closing)}
                    onblur={on_closing_blur}
                />
            </div>

            <SubmitButton busy={submit.busy} class="btn-primary">
                <i class="fas fa-check"></i>{" Salvar"}
            </SubmitButton>
        </form>
    }
}
