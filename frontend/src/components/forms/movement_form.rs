use super::{CategoryPicker, CsrfField, MoneyInput, SubmitButton};
use crate::hooks::use_safe_submit;
use shared::{Category, TypeChoice};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MovementFormProps {
    pub action: AttrValue,
    #[prop_or_default]
    pub csrf: Option<AttrValue>,
    pub categories: Vec<Category>,
    pub type_choices: Vec<TypeChoice>,
    #[prop_or_default]
    pub initial_type: Option<AttrValue>,
    #[prop_or_default]
    pub initial_category: Option<i64>,
    /// Amount of the movement being edited, dot-decimal
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    /// Day page the user came from
    pub back_href: AttrValue,
}

/// Create/edit form of a single movement. Posted as a regular HTML form.
#[function_component(MovementForm)]
pub fn movement_form(props: &MovementFormProps) -> Html {
    let submit = use_safe_submit();

    html! {
        <form
            ref={submit.form_ref.clone()}
            method="post"
            action={props.action.clone()}
            class="mov-form"
            onsubmit={submit.onsubmit.clone()}
        >
            <CsrfField token={props.csrf.clone()} />

            <CategoryPicker
                categories={props.categories.clone()}
                type_choices={props.type_choices.clone()}
                initial_type={props.initial_type.clone()}
                initial_category={props.initial_category}
            />

            <div class="form-group">
                <label for="id_valor">{"Valor"}</label>
                <MoneyInput id="id_valor" name="valor" value={props.value.clone()} />
            </div>

            <div class="form-group">
                <label for="id_descricao">{"Descrição"}</label>
                <textarea
                    id="id_descricao"
                    name="descricao"
                    class="form-control"
                    rows="3"
                    value={props.description.clone()}
                />
            </div>

            <div class="form-actions">
                <a href={props.back_href.clone()} class="btn btn-secondary">{"Voltar"}</a>
                <SubmitButton busy={submit.busy} class="btn-primary">
                    {"Salvar"}
                </SubmitButton>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::CategoryBucket;
    use yew::ServerRenderer;

    fn props() -> MovementFormProps {
        MovementFormProps {
            action: "/movimentacao/salvar/2024-03-15/".into(),
            csrf: Some("tok123".into()),
            categories: vec![
                Category {
                    id: 1,
                    name: "Maquininha".to_string(),
                    bucket: CategoryBucket::Cartao,
                },
                Category {
                    id: 2,
                    name: "Fornecedor".to_string(),
                    bucket: CategoryBucket::Saida,
                },
            ],
            type_choices: shared::ViewConfig::default().type_choices,
            initial_type: Some("CARTAO".into()),
            initial_category: Some(1),
            value: "1500.50".into(),
            description: "".into(),
            back_href: "/caixa/2024-03-15/".into(),
        }
    }

    #[tokio::test]
    async fn test_edit_form_renders_masked_value_and_token() {
        let html = ServerRenderer::<MovementForm>::with_props(props)
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(r#"value="1.500,50""#));
        assert!(html.contains(r#"name="csrfmiddlewaretoken""#));
        assert!(html.contains("Maquininha"));
        assert!(!html.contains("Fornecedor"));
    }

    #[tokio::test]
    async fn test_new_form_waits_for_type() {
        let html = ServerRenderer::<MovementForm>::with_props(|| MovementFormProps {
            initial_type: None,
            initial_category: None,
            value: "".into(),
            ..props()
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Escolha o tipo antes"));
    }
}
