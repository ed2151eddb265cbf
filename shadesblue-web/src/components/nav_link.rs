use crate::paths::router_base;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Marks the link as the current page.
    #[prop_or_default]
    pub current: bool,
    /// Preferred initial focus when rendered inside an overlay.
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

/// Full href for a route, including the deployment base path.
#[must_use]
pub fn route_href(route: &Route) -> String {
    format!("{}{}", router_base().unwrap_or_default(), route.to_path())
}

/// An anchor that navigates client-side when a router is present and falls
/// back to a plain link otherwise (server rendering, modified clicks).
#[function_component(NavLink)]
pub fn nav_link(props: &Props) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                e.prevent_default();
                navigator.push(&to);
            }
        })
    };

    html! {
        <a
            href={route_href(&props.to)}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            aria-current={props.current.then_some(AttrValue::Static("page"))}
            data-autofocus={props.autofocus.then_some(AttrValue::Static("true"))}
            ref={props.node_ref.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_plain_anchor_without_router() {
        let props = Props {
            to: Route::Project {
                slug: "ccte".into(),
            },
            class: classes!("card-link"),
            aria_label: Some(AttrValue::from("View")),
            current: true,
            autofocus: false,
            node_ref: NodeRef::default(),
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<NavLink>::with_props(props).render());
        assert!(html.contains(r#"href="/portfolio/ccte""#), "{html}");
        assert!(html.contains(r#"aria-current="page""#));
        assert!(!html.contains("data-autofocus"));
    }
}
