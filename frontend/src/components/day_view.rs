use super::balances::BalancesForm;
use super::header::DayHeader;
use super::movements::MovementList;
use super::side_menu::SideMenu;
use super::skip_day_toggle::SkipDayToggle;
use super::summary::Summary;
use crate::hooks::{use_day_loader, DayRequest};
use crate::services::api::ApiClient;
use crate::services::date_utils::format_date_for_display;
use crate::services::host_page;
use crate::services::logging::Logger;
use chrono::NaiveDate;
use gloo::events::EventListener;
use gloo::utils::window;
use shared::presentation::document_title;
use shared::routes::{day_for_path, day_path};
use shared::{DaySnapshot, ViewConfig};
use std::rc::Rc;
use yew::prelude::*;

const COMPONENT: &str = "day-view";

#[derive(Properties, PartialEq)]
pub struct DayViewProps {
    pub config: Rc<ViewConfig>,
    /// Snapshot embedded in the host page, if any
    #[prop_or_default]
    pub initial: Option<DaySnapshot>,
    /// Day to fetch when nothing was embedded
    pub initial_date: NaiveDate,
    #[prop_or_default]
    pub csrf: Option<AttrValue>,
}

/// Root of the daily cash page: every region is rendered from one snapshot.
#[function_component(DayView)]
pub fn day_view(props: &DayViewProps) -> Html {
    let config = props.config.clone();
    let api_client = use_memo(
        (config.api_base_url.clone(), config.api_path.clone()),
        |(base_url, path)| ApiClient::with_base_url(base_url.clone()).with_day_path(path),
    );
    let loader = use_day_loader(&api_client, &config.day_path, props.initial.clone());
    let load_day = loader.load_day.clone();

    // First fetch, when the host page did not embed the day
    {
        let load_day = load_day.clone();
        let needs_fetch = props.initial.is_none();
        let date = props.initial_date;
        use_effect_with((), move |_| {
            if needs_fetch {
                load_day.emit(DayRequest::in_place(date));
            }
            || ()
        });
    }

    // Back/forward already moved the URL; show the day it names
    {
        let load_day = load_day.clone();
        let opened_on = props.initial_date;
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "popstate", move |_| {
                let path = host_page::current_path().unwrap_or_default();
                let date = day_for_path(&path, opened_on);
                Logger::debug_with_component(COMPONENT, &format!("popstate to {} ({})", date, path));
                load_day.emit(DayRequest::in_place(date));
            });
            move || drop(listener)
        });
    }

    {
        use_effect_with(loader.state.snapshot.clone(), |snapshot| {
            if let Some(day) = snapshot {
                host_page::set_title(&document_title(day));
            }
            || ()
        });
    }

    let on_navigate = load_day.reform(DayRequest::navigate);

    let snapshot = loader.state.snapshot.as_ref();
    let date = snapshot.map(|day| day.date).unwrap_or(props.initial_date);
    let label = snapshot
        .map(|day| day.formatted_date.clone())
        .unwrap_or_else(|| format_date_for_display(date));
    let content_style = if loader.state.loading {
        "opacity: 0.5; transition: opacity 0.2s;"
    } else {
        "opacity: 1; transition: opacity 0.2s;"
    };

    html! {
        <div class="caixa-app">
            <div class="top-bar">
                <SideMenu links={config.menu_links.clone()} />
                <DayHeader
                    {date}
                    label={label}
                    nav={snapshot.map(|day| day.nav)}
                    day_path={config.day_path.clone()}
                    {on_navigate}
                />
            </div>

            <main id="conteudo-dia" style={content_style}>
                {match snapshot {
                    Some(day) => html! {
                        <DaySections day={day.clone()} config={config.clone()} csrf={props.csrf.clone()} />
                    },
                    None => html! {
                        <div class="loading">{"Carregando..."}</div>
                    },
                }}
            </main>

            <a
                id="btn-nova-movimentacao"
                class="fab-btn"
                href={day_path(&config.new_movement_path, date)}
                title="Nova movimentação"
            >
                <i class="fas fa-plus"></i>
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DaySectionsProps {
    pub day: DaySnapshot,
    pub config: Rc<ViewConfig>,
    #[prop_or_default]
    pub csrf: Option<AttrValue>,
}

/// Regions rendered from one loaded snapshot.
///
/// The balances form is keyed by day: a new snapshot remounts it, dropping
/// whatever was typed and any pending auto-save of the previous day.
#[function_component(DaySections)]
pub fn day_sections(props: &DaySectionsProps) -> Html {
    let day = &props.day;
    let config = &props.config;

    let balances = html! {
        <BalancesForm
            key={day.date.to_string()}
            balances={day.balances}
            action={day_path(&config.balances_action, day.date)}
            csrf={props.csrf.clone()}
            autosave_delay_ms={config.autosave_delay_ms}
        />
    };

    html! {
        <>
            <div class="saldos">{balances}</div>
            <Summary day={day.clone()} show_formula={config.show_formula} />
            if config.skip_day_toggle {
                <SkipDayToggle
                    closed={day.store_closed}
                    action={day_path(&config.toggle_action, day.date)}
                    csrf={props.csrf.clone()}
                    submit_delay_ms={config.toggle_submit_delay_ms}
                />
            }
            <MovementList
                movements={day.movements.clone()}
                expand_descriptions={config.expand_descriptions}
            />
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::{Balances, DayNavigation, Movement, MovementKind, Totals};
    use yew::ServerRenderer;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> DaySnapshot {
        DaySnapshot {
            date: date(2024, 3, 15),
            formatted_date: "Sexta, 15 de Março".to_string(),
            nav: DayNavigation {
                previous: date(2024, 3, 14),
                next: date(2024, 3, 16),
            },
            store_closed: false,
            balances: Balances {
                opening: 200.0,
                closing: 320.5,
            },
            totals: Totals {
                card: 1250.5,
                cash_in: 50.0,
                small_cash: 170.5,
                overall: 1421.0,
                withdrawals: 100.0,
            },
            movements: vec![Movement {
                label: "Maquininha".to_string(),
                description: None,
                kind: MovementKind::Cartao,
                amount: 42.5,
                edit_url: "/movimentacao/1/editar/".to_string(),
                delete_url: "/movimentacao/1/deletar/".to_string(),
            }],
        }
    }

    async fn render(config: ViewConfig, initial: Option<DaySnapshot>) -> String {
        ServerRenderer::<DayView>::with_props(move || DayViewProps {
            config: Rc::new(config),
            initial,
            initial_date: date(2024, 3, 15),
            csrf: Some("tok".into()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_embedded_snapshot_renders_every_region() {
        let html = render(ViewConfig::default(), Some(snapshot())).await;

        assert!(html.contains(r#"href="/caixa/2024-03-14/""#));
        assert!(html.contains(r#"action="/caixa/2024-03-15/fechar/""#));
        assert!(html.contains(r#"href="/movimentacao/salvar/2024-03-15/""#));
        assert!(html.contains("R$ 1.250,50"));
        assert!(html.contains("*Dinheiro = (100,00 Saídas + 320,50 Sobrou) - (200,00 Início + 50,00 Suprimentos)"));
        assert!(html.contains("+ R$ 42,50"));
        assert!(html.contains("opacity: 1;"));
    }

    #[tokio::test]
    async fn test_legacy_layout_has_no_toggle() {
        let html = render(ViewConfig::legacy(), Some(snapshot())).await;

        assert!(html.contains(r#"href="/2024-03-16/""#));
        assert!(!html.contains("loja_fechada"));
        assert!(html.contains("btn-delete"));
    }

    #[tokio::test]
    async fn test_without_snapshot_waits_for_first_load() {
        let html = render(ViewConfig::default(), None).await;

        assert!(html.contains("Carregando..."));
        assert!(html.contains("15/03/2024"));
        assert!(!html.contains("mov-list"));
    }
}
