use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// A DOM call that threw, or an element of the wrong kind
#[derive(Debug, Error)]
pub enum DomError {
    #[error("DOM operation failed: {0}")]
    Js(String),
    #[error("element is not a {0}")]
    WrongElement(&'static str),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

/// Every element matching `selector` under `root` that casts to `T`
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, DomError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Nearest ancestor (or self) of `element` matching `selector`
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}
