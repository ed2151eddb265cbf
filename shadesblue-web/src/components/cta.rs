use crate::components::nav_link::NavLink;
use crate::router::Route;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
}

impl CtaVariant {
    const fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "cta--primary",
            Self::Secondary => "cta--secondary",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Internal destination. Ignored when `href` is set.
    #[prop_or_default]
    pub to: Option<Route>,
    /// External or static-file destination.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub download: bool,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Button-styled link.
#[function_component(Cta)]
pub fn cta(props: &Props) -> Html {
    let class = classes!("cta", props.variant.class_name());
    if let Some(href) = props.href.clone() {
        return html! {
            <a
                {href}
                {class}
                aria-label={props.aria_label.clone()}
                download={props.download.then_some(AttrValue::Static(""))}
            >
                { for props.children.iter() }
            </a>
        };
    }
    html! {
        <NavLink
            to={props.to.clone().unwrap_or(Route::Home)}
            {class}
            aria_label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </NavLink>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn routes_and_files_render_as_links() {
        let internal = Props {
            to: Some(Route::Portfolio),
            href: None,
            download: false,
            variant: CtaVariant::Primary,
            aria_label: None,
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Cta>::with_props(internal).render());
        assert!(html.contains(r#"href="/portfolio""#), "{html}");
        assert!(html.contains("cta--primary"));

        let file = Props {
            to: None,
            href: Some(AttrValue::from("/resume.pdf")),
            download: true,
            variant: CtaVariant::Secondary,
            aria_label: Some(AttrValue::from("Download résumé as PDF")),
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Cta>::with_props(file).render());
        assert!(html.contains(r#"href="/resume.pdf""#));
        assert!(html.contains("download"));
        assert!(html.contains("cta--secondary"));
    }
}
