use shared::presentation::NO_DESCRIPTION;
use shared::Movement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MovementCardProps {
    pub movement: Movement,
    /// Position in the day, read back by the list's click delegation
    pub index: usize,
    /// Accordion layout: details and actions open under the line
    pub accordion: bool,
    #[prop_or_default]
    pub expanded: bool,
}

fn actions(movement: &Movement) -> Html {
    html! {
        <div class="mov-actions">
            <a href={movement.edit_url.clone()} class="btn-edit" title="Editar">
                <i class="fas fa-pen"></i>
            </a>
            <a href={movement.delete_url.clone()} class="btn-delete" title="Apagar">
                <i class="fas fa-trash"></i>
            </a>
        </div>
    }
}

#[function_component(MovementCard)]
pub fn movement_card(props: &MovementCardProps) -> Html {
    let movement = &props.movement;
    let look = movement.presentation();
    let expanded = (props.accordion && props.expanded).then_some("expanded");

    html! {
        <div class={classes!("mov-card", look.css_class, expanded)} data-index={props.index.to_string()}>
            <div class="mov-main">
                <div class="mov-icon"><i class={look.icon}></i></div>
                <div class="mov-info">
                    <span class="mov-title">{&movement.label}</span>
                    <span class="mov-subtitle">{look.subtitle}</span>
                </div>
                <span class="mov-valor">{movement.signed_amount()}</span>
                if !props.accordion {
                    {actions(movement)}
                }
            </div>
            if expanded.is_some() {
                <div class="mov-details">
                    <p class="mov-desc">{movement.description_text().unwrap_or(NO_DESCRIPTION)}</p>
                    {actions(movement)}
                </div>
            }
        </div>
    }
}
