use super::MovementCard;
use crate::services::confirm::{allow_delete, Confirmer, DELETE_SELECTOR};
use crate::services::dom::closest;
use shared::presentation::EMPTY_DAY_MESSAGE;
use shared::Movement;
use std::collections::HashSet;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MovementListProps {
    pub movements: Vec<Movement>,
    pub expand_descriptions: bool,
    /// Asked before a delete link is followed
    #[prop_or_default]
    pub confirm: Confirmer,
}

/// The day's ledger. One click listener on the container serves every card,
/// whatever snapshot rendered them.
#[function_component(MovementList)]
pub fn movement_list(props: &MovementListProps) -> Html {
    let expanded = use_state(HashSet::<usize>::new);

    // Indexes mean nothing once another day is shown
    {
        let expanded = expanded.clone();
        use_effect_with(props.movements.clone(), move |_| {
            expanded.set(HashSet::new());
            || ()
        });
    }

    let onclick = {
        let expanded = expanded.clone();
        let accordion = props.expand_descriptions;
        let confirm = props.confirm.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };

            if closest(&target, DELETE_SELECTOR).is_some() {
                if !allow_delete(&confirm) {
                    e.prevent_default();
                }
                return;
            }

            if !accordion
                || closest(&target, ".mov-details").is_some()
                || closest(&target, "a").is_some()
            {
                return;
            }

            let index = closest(&target, ".mov-card")
                .and_then(|card| card.get_attribute("data-index"))
                .and_then(|value| value.parse::<usize>().ok());
            if let Some(index) = index {
                let mut next = (*expanded).clone();
                if !next.remove(&index) {
                    next.insert(index);
                }
                expanded.set(next);
            }
        })
    };

    html! {
        <div id="lista-movimentacoes" class="mov-list" {onclick}>
            if props.movements.is_empty() {
                <div class="empty-state">
                    <i class="fas fa-basket-shopping"></i>
                    <p>{EMPTY_DAY_MESSAGE}</p>
                </div>
            } else {
                {for props.movements.iter().enumerate().map(|(index, movement)| html! {
                    <MovementCard
                        key={movement.delete_url.clone()}
                        movement={movement.clone()}
                        {index}
                        accordion={props.expand_descriptions}
                        expanded={expanded.contains(&index)}
                    />
                })}
            }
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::services::confirm::{Confirm, DELETE_PROMPT};
    use gloo::timers::future::TimeoutFuture;
    use gloo::utils::document;
    use shared::MovementKind;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    struct ScriptedConfirm {
        answer: bool,
        asked: Rc<RefCell<Vec<String>>>,
    }

    impl Confirm for ScriptedConfirm {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    /// Click the trash icon of a one-movement list and report whether the
    /// link's navigation was cancelled, plus the questions asked
    async fn click_delete(answer: bool) -> (bool, Vec<String>) {
        let asked = Rc::new(RefCell::new(Vec::new()));
        let props = MovementListProps {
            movements: vec![Movement {
                label: "Fornecedor".to_string(),
                description: None,
                kind: MovementKind::Saida,
                amount: 10.0,
                edit_url: "#editar".to_string(),
                delete_url: "#apagar".to_string(),
            }],
            expand_descriptions: false,
            confirm: Confirmer::new(ScriptedConfirm {
                answer,
                asked: asked.clone(),
            }),
        };

        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<MovementList>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(20).await;

        let icon = root.query_selector(".btn-delete i").unwrap().unwrap();
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let click = Event::new_with_event_init_dict("click", &init).unwrap();
        icon.dispatch_event(&click).unwrap();

        let asked = asked.borrow().clone();
        (click.default_prevented(), asked)
    }

    #[wasm_bindgen_test]
    async fn test_declined_delete_cancels_navigation() {
        let (prevented, asked) = click_delete(false).await;

        assert!(prevented);
        assert_eq!(asked, vec![DELETE_PROMPT.to_string()]);
    }

    #[wasm_bindgen_test]
    async fn test_accepted_delete_follows_link() {
        let (prevented, asked) = click_delete(true).await;

        assert!(!prevented);
        assert_eq!(asked.len(), 1);
    }
}
