use shared::categories::{category_select, retain_selection};
use shared::{Category, MovementKind, TypeChoice};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    pub categories: Vec<Category>,
    pub type_choices: Vec<TypeChoice>,
    /// Type value saved with the movement being edited, as posted by the
    /// type select
    #[prop_or_default]
    pub initial_type: Option<AttrValue>,
    /// Category saved with the movement being edited
    #[prop_or_default]
    pub initial_category: Option<i64>,
}

/// Transaction type select driving a dependent category select.
#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    // Raw option value: configured choices may use codes of their own
    let type_value = use_state(|| props.initial_type.as_ref().map(|value| value.to_string()));
    let kind = type_value.as_deref().and_then(MovementKind::from_code);
    let selected = {
        let categories = props.categories.clone();
        let initial_kind = kind;
        let initial_category = props.initial_category;
        use_state(move || retain_selection(&categories, initial_kind, initial_category))
    };
    let category_ref = use_node_ref();

    // Option `selected` attributes do not move the live selection; set it explicitly
    {
        let category_ref = category_ref.clone();
        use_effect_with((kind, *selected), move |(_, selected)| {
            if let Some(select) = category_ref.cast::<HtmlSelectElement>() {
                select.set_value(&selected.map(|id| id.to_string()).unwrap_or_default());
            }
            || ()
        });
    }

    let on_type_change = {
        let type_value = type_value.clone();
        let selected = selected.clone();
        let categories = props.categories.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let next = MovementKind::from_code(&value);
            type_value.set((!value.is_empty()).then_some(value));
            selected.set(retain_selection(&categories, next, *selected));
        })
    };

    let on_category_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value().parse::<i64>().ok());
        })
    };

    let category_state = category_select(&props.categories, kind, *selected);
    let background = if category_state.is_disabled() {
        "background-color: #f3f4f6;"
    } else {
        "background-color: #fff;"
    };
    let current_value = type_value.as_deref();

    html! {
        <>
            <div class="form-group">
                <label for="select-tipo">{"Tipo"}</label>
                <select id="select-tipo" name="tipo" class="form-select" onchange={on_type_change}>
                    <option value="" disabled=true selected={current_value.is_none()}>
                        {"--- Selecione o Tipo ---"}
                    </option>
                    {for props.type_choices.iter().map(|choice| {
                        let is_selected = current_value == Some(choice.value.as_str());
                        html! {
                            <option key={choice.value.clone()} value={choice.value.clone()} selected={is_selected}>
                                {&choice.label}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="select-categoria">{"Categoria"}</label>
                <select
                    ref={category_ref}
                    id="select-categoria"
                    name="categoria"
                    class="form-select"
                    disabled={category_state.is_disabled()}
                    style={background}
                    onchange={on_category_change}
                >
                    <option value="" disabled=true selected={category_state.selected().is_none()}>
                        {category_state.placeholder()}
                    </option>
                    {for category_state.options().iter().map(|category| html! {
                        <option
                            key={category.id.to_string()}
                            value={category.id.to_string()}
                            selected={category_state.selected() == Some(category.id)}
                        >
                            {&category.name}
                        </option>
                    })}
                </select>
            </div>
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::CategoryBucket;
    use yew::ServerRenderer;

    async fn render(initial_type: Option<&'static str>, type_choices: Vec<TypeChoice>) -> String {
        ServerRenderer::<CategoryPicker>::with_props(move || CategoryPickerProps {
            categories: vec![
                Category {
                    id: 2,
                    name: "Fornecedor".to_string(),
                    bucket: CategoryBucket::Saida,
                },
                Category {
                    id: 3,
                    name: "Maquininha".to_string(),
                    bucket: CategoryBucket::Cartao,
                },
            ],
            type_choices,
            initial_type: initial_type.map(AttrValue::from),
            initial_category: Some(2),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_custom_type_code_stays_selected() {
        let mut choices = shared::ViewConfig::default().type_choices;
        choices.push(TypeChoice::new("SANGRIA", "Sangria"));

        let html = render(Some("SANGRIA"), choices).await;

        assert!(html.contains(r#"value="SANGRIA" selected"#));
        assert!(!html.contains(r#"value="SAIDA" selected"#));
        // Unknown codes fall into the cash-out bucket
        assert!(html.contains("Fornecedor"));
        assert!(!html.contains("Maquininha"));
    }

    #[tokio::test]
    async fn test_known_type_code_is_selected() {
        let html = render(Some("SAIDA"), shared::ViewConfig::default().type_choices).await;

        assert!(html.contains(r#"value="SAIDA" selected"#));
    }
}
