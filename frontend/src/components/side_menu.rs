use shared::MenuLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub links: Vec<MenuLink>,
}

/// Collapsible side navigation with a dimming overlay
#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    let open = use_state(|| false);

    let set_open = |value: bool| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(value))
    };
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let active = (*open).then_some("active");

    html! {
        <>
            <button id="open-menu" class="btn-menu" type="button" onclick={set_open(true)}>
                <i class="fas fa-bars"></i>
            </button>

            <div id="overlay" class={classes!("overlay", active)} onclick={toggle}></div>

            <nav id="sidebar" class={classes!("sidebar", active)}>
                <button id="close-menu" class="btn-close-menu" type="button" onclick={set_open(false)}>
                    <i class="fas fa-times"></i>
                </button>
                <ul class="sidebar-links">
                    {for props.links.iter().map(|link| html! {
                        <li key={link.href.clone()}>
                            <a href={link.href.clone()}>
                                if let Some(icon) = &link.icon {
                                    <i class={icon.clone()}></i>{" "}
                                }
                                {&link.label}
                            </a>
                        </li>
                    })}
                </ul>
            </nav>
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_menu_starts_closed_with_configured_links() {
        let html = ServerRenderer::<SideMenu>::with_props(|| SideMenuProps {
            links: shared::ViewConfig::default().menu_links,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"href="/categorias/""#));
        assert!(html.contains("Caixa diário"));
        assert!(!html.contains("active"));
    }
}
