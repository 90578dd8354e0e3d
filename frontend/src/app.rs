//! Mounts one Yew application per mount point found in the host page.

use crate::components::category_browser::{CategoryBrowser, CategoryBrowserProps};
use crate::components::day_view::{DayView, DayViewProps};
use crate::components::forms::movement_form::{MovementForm, MovementFormProps};
use crate::services::date_utils::get_current_date;
use crate::services::host_page::{self, CATEGORIES_MOUNT_ID, DAY_MOUNT_ID, MOVEMENT_FORM_MOUNT_ID};
use crate::services::logging::Logger;
use chrono::NaiveDate;
use shared::routes::{parse_day_path, parse_iso_date};
use shared::{Category, ViewConfig};
use std::rc::Rc;
use web_sys::Element;
use yew::AttrValue;

const COMPONENT: &str = "host-page";

pub fn mount() {
    if let Some(root) = host_page::mount_element(DAY_MOUNT_ID) {
        mount_day_view(root);
    }
    if let Some(root) = host_page::mount_element(MOVEMENT_FORM_MOUNT_ID) {
        mount_movement_form(root);
    }
    if let Some(root) = host_page::mount_element(CATEGORIES_MOUNT_ID) {
        mount_category_browser(root);
    }
}

/// Configuration of a mount point; an unreadable one falls back to defaults
fn load_config(root: &Element) -> ViewConfig {
    let config = host_page::read_config(root).unwrap_or_else(|e| {
        Logger::warn_with_component(COMPONENT, &format!("{:#}, using defaults", e));
        ViewConfig::default()
    });
    Logger::set_debug(config.debug);
    config
}

fn load_categories() -> Vec<Category> {
    host_page::read_categories().unwrap_or_else(|e| {
        Logger::warn_with_component(COMPONENT, &format!("{:#}", e));
        Vec::new()
    })
}

fn csrf(root: &Element) -> Option<AttrValue> {
    host_page::read_attr(root, "data-csrf").map(AttrValue::from)
}

/// Day to show first: the `data-dia` attribute, then the URL, then today
fn requested_date(root: &Element) -> Option<NaiveDate> {
    host_page::read_attr(root, "data-dia")
        .and_then(|value| parse_iso_date(&value))
        .or_else(|| host_page::current_path().and_then(|path| parse_day_path(&path)))
        .or_else(get_current_date)
}

fn mount_day_view(root: Element) {
    let config = load_config(&root);

    let initial = host_page::read_initial_snapshot().unwrap_or_else(|e| {
        Logger::warn_with_component(COMPONENT, &format!("{:#}, fetching instead", e));
        None
    });
    let Some(initial_date) = initial.as_ref().map(|day| day.date).or_else(|| requested_date(&root)) else {
        Logger::error_with_component(COMPONENT, "no day to show");
        return;
    };

    let props = DayViewProps {
        config: Rc::new(config),
        initial,
        initial_date,
        csrf: csrf(&root),
    };
    Logger::info_with_component(COMPONENT, &format!("mounting day view for {}", initial_date));
    yew::Renderer::<DayView>::with_root_and_props(root, props).render();
}

fn mount_movement_form(root: Element) {
    let config = load_config(&root);
    let attr = |name: &str| host_page::read_attr(&root, name);

    let Some(action) = attr("data-action") else {
        Logger::error_with_component(COMPONENT, "movement form without data-action");
        return;
    };

    let props = MovementFormProps {
        action: action.into(),
        csrf: csrf(&root),
        categories: load_categories(),
        type_choices: config.type_choices,
        initial_type: attr("data-tipo").map(AttrValue::from),
        initial_category: attr("data-categoria").and_then(|id| id.parse().ok()),
        value: attr("data-valor").unwrap_or_default().into(),
        description: attr("data-descricao").unwrap_or_default().into(),
        back_href: attr("data-voltar").unwrap_or_else(|| "/".to_string()).into(),
    };
    yew::Renderer::<MovementForm>::with_root_and_props(root, props).render();
}

fn mount_category_browser(root: Element) {
    let config = load_config(&root);
    let props = CategoryBrowserProps {
        categories: load_categories(),
        edit_path: config.category_edit_path.into(),
    };
    yew::Renderer::<CategoryBrowser>::with_root_and_props(root, props).render();
}
