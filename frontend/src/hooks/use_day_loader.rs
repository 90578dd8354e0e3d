use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use chrono::NaiveDate;
use gloo::history::{BrowserHistory, History};
use shared::routes::day_path;
use shared::{DaySnapshot, LoadTicket, LoadTracker, Settlement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COMPONENT: &str = "day-loader";

/// Whether a successful load adds a browser history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    /// Initial load, or back/forward navigation that already moved the URL
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayRequest {
    pub date: NaiveDate,
    pub history: HistoryMode,
}

impl DayRequest {
    pub fn navigate(date: NaiveDate) -> Self {
        Self {
            date,
            history: HistoryMode::Push,
        }
    }

    pub fn in_place(date: NaiveDate) -> Self {
        Self {
            date,
            history: HistoryMode::Keep,
        }
    }
}

#[derive(Clone)]
pub struct DayLoaderState {
    pub snapshot: Option<DaySnapshot>,
    pub loading: bool,
}

pub struct UseDayLoaderResult {
    pub state: DayLoaderState,
    pub load_day: Callback<DayRequest>,
}

/// What a settled request does to the view
#[derive(Debug)]
pub enum LoadOutcome {
    /// Replace the rendered snapshot, optionally recording a history entry
    Show { day: DaySnapshot, push_history: bool },
    /// The latest request failed; the previous snapshot stays
    Failed(ApiError),
    /// A newer request is in charge; nothing changes
    Superseded,
}

#[derive(Debug)]
pub struct FinishedLoad {
    pub outcome: LoadOutcome,
    /// Loading indicator after this request, on for as long as the latest
    /// request is still out
    pub loading: bool,
}

/// Settle `ticket` and decide how its result reaches the view.
pub fn finish_load(
    tracker: &mut LoadTracker,
    ticket: LoadTicket,
    history: HistoryMode,
    result: Result<DaySnapshot, ApiError>,
) -> FinishedLoad {
    let outcome = match (tracker.settle(ticket), result) {
        (Settlement::Stale, _) => LoadOutcome::Superseded,
        (Settlement::Apply, Ok(day)) => LoadOutcome::Show {
            day,
            push_history: history == HistoryMode::Push,
        },
        (Settlement::Apply, Err(e)) => LoadOutcome::Failed(e),
    };

    FinishedLoad {
        outcome,
        loading: tracker.is_loading(),
    }
}

/// Fetch a day's snapshot and make it the rendered state.
///
/// Failures are logged and swallowed: the previous snapshot stays on screen.
/// Overlapping requests resolve to the most recent one.
#[hook]
pub fn use_day_loader(
    api_client: &ApiClient,
    day_path_template: &str,
    initial: Option<DaySnapshot>,
) -> UseDayLoaderResult {
    let snapshot = use_state(move || initial);
    let loading = use_state(|| false);
    let tracker = use_mut_ref(LoadTracker::default);

    let load_day = {
        let api_client = api_client.clone();
        let day_path_template = day_path_template.to_string();
        let snapshot = snapshot.clone();
        let loading = loading.clone();
        let tracker = tracker.clone();

        use_callback((), move |request: DayRequest, _| {
            let ticket = tracker.borrow_mut().begin(request.date);
            loading.set(true);
            Logger::debug_with_component(COMPONENT, &format!("loading {}", request.date));

            let api_client = api_client.clone();
            let day_path_template = day_path_template.clone();
            let snapshot = snapshot.clone();
            let loading = loading.clone();
            let tracker = tracker.clone();

            spawn_local(async move {
                let result = api_client.get_day(request.date).await;
                let finished = finish_load(&mut tracker.borrow_mut(), ticket, request.history, result);

                match finished.outcome {
                    LoadOutcome::Show { day, push_history } => {
                        if push_history {
                            BrowserHistory::new().push(day_path(&day_path_template, day.date));
                        }
                        snapshot.set(Some(day));
                    }
                    LoadOutcome::Failed(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Erro ao carregar dia {}: {}", request.date, e),
                        );
                    }
                    LoadOutcome::Superseded => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("discarding superseded response for {}", request.date),
                        );
                    }
                }

                loading.set(finished.loading);
            });
        })
    };

    let state = DayLoaderState {
        snapshot: (*snapshot).clone(),
        loading: *loading,
    };

    UseDayLoaderResult { state, load_day }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Balances, DayNavigation, Totals};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn snapshot(day: u32) -> DaySnapshot {
        DaySnapshot {
            date: date(day),
            formatted_date: format!("{:02}/01/2025", day),
            nav: DayNavigation {
                previous: date(day - 1),
                next: date(day + 1),
            },
            store_closed: false,
            balances: Balances::default(),
            totals: Totals::default(),
            movements: Vec::new(),
        }
    }

    fn not_found(day: u32) -> ApiError {
        ApiError::Status {
            status: 404,
            url: format!("/api/dados/2025-01-{:02}/", day),
        }
    }

    #[test]
    fn test_failed_load_keeps_view_and_clears_loading() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(date(10));

        let finished = finish_load(&mut tracker, ticket, HistoryMode::Push, Err(not_found(10)));

        assert!(matches!(finished.outcome, LoadOutcome::Failed(ApiError::Status { status: 404, .. })));
        assert!(!finished.loading);
    }

    #[test]
    fn test_navigation_pushes_history() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(date(10));

        let finished = finish_load(&mut tracker, ticket, HistoryMode::Push, Ok(snapshot(10)));

        match finished.outcome {
            LoadOutcome::Show { day, push_history } => {
                assert_eq!(day.date, date(10));
                assert!(push_history);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!finished.loading);
    }

    #[test]
    fn test_in_place_load_keeps_history() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(date(10));

        let finished = finish_load(&mut tracker, ticket, HistoryMode::Keep, Ok(snapshot(10)));

        assert!(matches!(finished.outcome, LoadOutcome::Show { push_history: false, .. }));
    }

    #[test]
    fn test_superseded_response_is_dropped_while_latest_is_out() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin(date(10));
        let latest = tracker.begin(date(11));

        let finished = finish_load(&mut tracker, first, HistoryMode::Push, Ok(snapshot(10)));
        assert!(matches!(finished.outcome, LoadOutcome::Superseded));
        assert!(finished.loading);

        let finished = finish_load(&mut tracker, latest, HistoryMode::Push, Err(ApiError::Network("offline".to_string())));
        assert!(matches!(finished.outcome, LoadOutcome::Failed(ApiError::Network(_))));
        assert!(!finished.loading);
    }
}
