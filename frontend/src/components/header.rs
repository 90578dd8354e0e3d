use chrono::NaiveDate;
use shared::routes::{day_path, parse_iso_date, ISO_DATE_FORMAT};
use shared::DayNavigation;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayHeaderProps {
    pub date: NaiveDate,
    /// Server-formatted label, e.g. "Sexta, 15 de Março"
    pub label: AttrValue,
    pub nav: Option<DayNavigation>,
    /// Browser path template used for the prev/next `href`s
    pub day_path: AttrValue,
    pub on_navigate: Callback<NaiveDate>,
}

/// Prev/next handler. Ctrl/Cmd-click keeps the browser's own behaviour
/// (open in a new tab), anything else loads the day in place.
fn nav_click(date: NaiveDate, on_navigate: Callback<NaiveDate>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if e.ctrl_key() || e.meta_key() {
            return;
        }
        e.prevent_default();
        on_navigate.emit(date);
    })
}

#[function_component(DayHeader)]
pub fn day_header(props: &DayHeaderProps) -> Html {
    let on_date_change = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(date) = parse_iso_date(&input.value()) {
                on_navigate.emit(date);
            }
        })
    };

    let nav_link = |id: &'static str, icon: &'static str, target: Option<NaiveDate>| match target {
        Some(date) => html! {
            <a
                id={id}
                class="btn-nav"
                href={day_path(&props.day_path, date)}
                data-dest={date.format(ISO_DATE_FORMAT).to_string()}
                onclick={nav_click(date, props.on_navigate.clone())}
            >
                <i class={icon}></i>
            </a>
        },
        None => html! {
            <span id={id} class="btn-nav disabled"><i class={icon}></i></span>
        },
    };

    let nav = props.nav.as_ref();

    html! {
        <header class="day-header">
            {nav_link("btn-anterior", "fas fa-chevron-left", nav.map(|n| n.previous))}

            <label class="date-display" for="seletor-data">
                <span id="display-data">{&props.label}</span>
                {" "}
                <i class="fas fa-caret-down"></i>
                <input
                    type="date"
                    id="seletor-data"
                    class="date-input-hidden"
                    value={props.date.format(ISO_DATE_FORMAT).to_string()}
                    onchange={on_date_change}
                />
            </label>

            {nav_link("btn-proximo", "fas fa-chevron-right", nav.map(|n| n.next))}
        </header>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_links_point_at_adjacent_days() {
        let html = ServerRenderer::<DayHeader>::with_props(|| DayHeaderProps {
            date: date(2024, 3, 15),
            label: "Sexta, 15 de Março".into(),
            nav: Some(DayNavigation {
                previous: date(2024, 3, 14),
                next: date(2024, 3, 16),
            }),
            day_path: "/caixa/{data}/".into(),
            on_navigate: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"href="/caixa/2024-03-14/""#));
        assert!(html.contains(r#"data-dest="2024-03-16""#));
        assert!(html.contains(r#"value="2024-03-15""#));
        assert!(html.contains("Sexta, 15 de Março"));
    }

    #[tokio::test]
    async fn test_without_navigation_links_are_inert() {
        let html = ServerRenderer::<DayHeader>::with_props(|| DayHeaderProps {
            date: date(2024, 3, 15),
            label: "15/03/2024".into(),
            nav: None,
            day_path: "/{data}/".into(),
            on_navigate: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(!html.contains("href="));
        assert!(html.contains("btn-nav disabled"));
    }
}
