//! Submission of forms that carry masked currency fields.
//!
//! The visible inputs show `1.234,56`; the server expects `1234.56`. Before
//! the form goes out, each masked value is written into a hidden input with
//! the same name and the visible input loses its name, so only the plain
//! decimal is transmitted.

use super::dom::{query_all, DomError};
use gloo::utils::document;
use shared::submit::{clean_field, MaskedField};
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement};

/// Class carried by every masked currency input
pub const MASK_CLASS: &str = "money-mask";

/// Current width of the form's submit button, so the busy state can keep it
pub fn submit_button_width(form: &HtmlFormElement) -> Option<i32> {
    form.query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        .map(|button| button.offset_width())
        .filter(|width| *width > 0)
}

/// Replace masked values with plain decimals in hidden fields.
/// Returns how many fields were rewritten.
pub fn rewrite_masked_fields(form: &HtmlFormElement) -> Result<usize, DomError> {
    let inputs: Vec<HtmlInputElement> = query_all(form, &format!(".{}", MASK_CLASS))?;
    let mut rewritten = 0;

    for input in inputs {
        let name = input.get_attribute("name");
        let value = input.value();
        let Some(clean) = clean_field(MaskedField {
            name: name.as_deref(),
            value: &value,
        }) else {
            continue;
        };

        hidden_field(form, &clean.name)?.set_value(&clean.value);
        input.remove_attribute("name")?;
        rewritten += 1;
    }

    Ok(rewritten)
}

/// Rewrite the masked fields and submit the form programmatically.
pub fn submit_clean(form: &HtmlFormElement) -> Result<(), DomError> {
    rewrite_masked_fields(form)?;
    form.submit()?;
    Ok(())
}

/// Existing hidden input named `name`, or a new one appended to the form
fn hidden_field(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement, DomError> {
    let selector = format!("input[type=\"hidden\"][name=\"{}\"]", name);
    if let Some(existing) = form.query_selector(&selector)? {
        return existing
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::WrongElement("input"));
    }

    let hidden: HtmlInputElement = document()
        .create_element("input")?
        .dyn_into()
        .map_err(|_| DomError::WrongElement("input"))?;
    hidden.set_type("hidden");
    hidden.set_name(name);
    form.append_child(&hidden)?;
    Ok(hidden)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form_with(html: &str) -> HtmlFormElement {
        let form: HtmlFormElement = document().create_element("form").unwrap().dyn_into().unwrap();
        form.set_inner_html(html);
        document().body().unwrap().append_child(&form).unwrap();
        form
    }

    #[wasm_bindgen_test]
    fn test_masked_value_is_sent_as_plain_decimal() {
        let form = form_with(r#"<input type="text" class="money-mask" name="valor" value="1.234,56">"#);

        assert_eq!(rewrite_masked_fields(&form).unwrap(), 1);

        let hidden: HtmlInputElement = form
            .query_selector("input[type=\"hidden\"][name=\"valor\"]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(hidden.value(), "1234.56");

        let visible = form.query_selector(".money-mask").unwrap().unwrap();
        assert!(visible.get_attribute("name").is_none());
    }

    #[wasm_bindgen_test]
    fn test_existing_hidden_field_is_reused() {
        let form = form_with(
            r#"<input type="hidden" name="saldo_final" value="old">
               <input type="text" class="money-mask" name="saldo_final" value="320,50">"#,
        );

        rewrite_masked_fields(&form).unwrap();

        let hidden = form.query_selector_all("input[type=\"hidden\"]").unwrap();
        assert_eq!(hidden.length(), 1);
        let hidden: HtmlInputElement = hidden.item(0).unwrap().dyn_into().unwrap();
        assert_eq!(hidden.value(), "320.50");
    }

    #[wasm_bindgen_test]
    fn test_empty_masked_field_keeps_its_name() {
        let form = form_with(r#"<input type="text" class="money-mask" name="valor" value="">"#);

        assert_eq!(rewrite_masked_fields(&form).unwrap(), 0);
        let visible = form.query_selector(".money-mask").unwrap().unwrap();
        assert_eq!(visible.get_attribute("name").as_deref(), Some("valor"));
    }
}
