use shared::routes::id_path;
use shared::{Category, CategoryFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBrowserProps {
    pub categories: Vec<Category>,
    /// Edit page template with an `{id}` placeholder
    pub edit_path: AttrValue,
}

/// Category listing filtered by bucket badges
#[function_component(CategoryBrowser)]
pub fn category_browser(props: &CategoryBrowserProps) -> Html {
    let filter = use_state(|| CategoryFilter::All);

    html! {
        <div class="categorias">
            <div class="filter-buttons">
                {for CategoryFilter::BUTTONS.iter().map(|&button| {
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(button))
                    };
                    let active = (*filter == button).then_some("active");
                    html! {
                        <button
                            key={button.code()}
                            type="button"
                            class={classes!("filter-btn", active)}
                            data-filter={button.code()}
                            {onclick}
                        >
                            {button.label()}
                        </button>
                    }
                })}
            </div>

            <div class="cat-grid">
                {for props.categories.iter().map(|category| {
                    let code = category.bucket.code();
                    let display = if filter.matches(code) { "display: block;" } else { "display: none;" };
                    html! {
                        <a
                            key={category.id.to_string()}
                            class="cat-card-link"
                            href={id_path(&props.edit_path, category.id)}
                            data-type={code}
                            style={display}
                        >
                            <div class="cat-card">
                                <span class="cat-name">{&category.name}</span>
                                <span class={classes!("cat-badge", code.to_lowercase())}>
                                    {category.bucket.label()}
                                </span>
                            </div>
                        </a>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::CategoryBucket;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_all_filter_shows_every_card() {
        let html = ServerRenderer::<CategoryBrowser>::with_props(|| CategoryBrowserProps {
            categories: vec![
                Category {
                    id: 3,
                    name: "Pix".to_string(),
                    bucket: CategoryBucket::Cartao,
                },
                Category {
                    id: 5,
                    name: "Sangria".to_string(),
                    bucket: CategoryBucket::Saida,
                },
            ],
            edit_path: "/categorias/{id}/editar/".into(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"href="/categorias/3/editar/""#));
        assert!(html.contains(r#"data-type="SAIDA""#));
        assert!(!html.contains("display: none;"));
        assert_eq!(html.matches("filter-btn").count(), 4);
    }
}
