use crate::services::logging::Logger;
use crate::services::safe_submit;
use shared::SubmitGuard;
use web_sys::HtmlFormElement;
use yew::prelude::*;

const COMPONENT: &str = "safe-submit";

/// Submit button appearance while the form is going out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusyState {
    /// Width the button had before the spinner replaced its content
    pub width: Option<i32>,
}

pub struct UseSafeSubmit {
    pub form_ref: NodeRef,
    pub guard: SubmitGuard,
    pub busy: Option<BusyState>,
    /// `onsubmit` handler for the form
    pub onsubmit: Callback<SubmitEvent>,
    /// Programmatic submit, e.g. auto-save on blur
    pub submit: Callback<()>,
}

/// Intercept submission of a form holding masked currency fields.
#[hook]
pub fn use_safe_submit() -> UseSafeSubmit {
    let form_ref = use_node_ref();
    let guard = use_memo((), |_| SubmitGuard::default());
    let busy = use_state(|| Option::<BusyState>::None);

    let submit = {
        let form_ref = form_ref.clone();
        let guard = guard.clone();
        let busy = busy.clone();

        use_callback((), move |_: (), _| {
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if !guard.try_begin() {
                Logger::debug_with_component(COMPONENT, "form already submitting, ignoring");
                return;
            }

            busy.set(Some(BusyState {
                width: safe_submit::submit_button_width(&form),
            }));

            if let Err(e) = safe_submit::submit_clean(&form) {
                Logger::error_with_component(COMPONENT, &format!("submit failed: {}", e));
                guard.release();
                busy.set(None);
            }
        })
    };

    let onsubmit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    UseSafeSubmit {
        form_ref,
        guard: (*guard).clone(),
        busy: *busy,
        onsubmit,
        submit,
    }
}
