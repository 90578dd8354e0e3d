//! Everything read from the server-rendered host page: mount points, their
//! `data-*` attributes, the embedded first snapshot and injected globals.

use anyhow::{anyhow, Context};
use gloo::utils::{document, window};
use serde::de::DeserializeOwned;
use shared::{Category, DaySnapshot, ViewConfig};
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const DAY_MOUNT_ID: &str = "caixa-app";
pub const MOVEMENT_FORM_MOUNT_ID: &str = "movimentacao-app";
pub const CATEGORIES_MOUNT_ID: &str = "categorias-app";

/// `<script type="application/json">` holding the first snapshot
pub const INITIAL_SNAPSHOT_ID: &str = "dados-iniciais";
/// Global array of `{id, nome, tipo}` injected before this code runs
pub const CATEGORIES_GLOBAL: &str = "categoriasDados";

pub fn mount_element(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Non-empty `data-*` attribute of a mount element
pub fn read_attr(root: &Element, name: &str) -> Option<String> {
    root.get_attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn read_config(root: &Element) -> anyhow::Result<ViewConfig> {
    match read_attr(root, "data-config") {
        Some(json) => {
            ViewConfig::from_json(&json).context("data-config is not a valid view configuration")
        }
        None => Ok(ViewConfig::default()),
    }
}

pub fn read_initial_snapshot() -> anyhow::Result<Option<DaySnapshot>> {
    let Some(script) = document().get_element_by_id(INITIAL_SNAPSHOT_ID) else {
        return Ok(None);
    };
    let json = script.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(None);
    }
    parse_json(&json)
        .map(Some)
        .with_context(|| format!("#{} does not hold a day snapshot", INITIAL_SNAPSHOT_ID))
}

pub fn read_categories() -> anyhow::Result<Vec<Category>> {
    let value = js_sys::Reflect::get(window().as_ref(), &JsValue::from_str(CATEGORIES_GLOBAL))
        .map_err(|e| anyhow!("cannot read {}: {:?}", CATEGORIES_GLOBAL, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }

    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|e| anyhow!("cannot serialize {}: {:?}", CATEGORIES_GLOBAL, e))?
        .into();
    parse_json(&json).with_context(|| format!("{} does not match the category shape", CATEGORIES_GLOBAL))
}

pub fn current_path() -> Option<String> {
    window().location().pathname().ok()
}

pub fn set_title(title: &str) {
    document().set_title(title);
}

fn parse_json<T: DeserializeOwned>(json: &str) -> anyhow::Result<T> {
    Ok(serde_json::from_str(json)?)
}
