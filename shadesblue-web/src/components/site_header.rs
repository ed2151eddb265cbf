use crate::components::drawer::Drawer;
use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::{Route, nav_items};
use yew::prelude::*;

const MENU_ID: &str = "mobile-menu";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub drawer_open: bool,
    pub on_drawer: Callback<bool>,
}

fn logo(class: &'static str) -> Html {
    html! {
        <span class={class}>
            <img src={asset_path("images/logo_2025_W.png")} alt={t("site.logo_alt")} />
        </span>
    }
}

fn nav_entries(current: &Route, class: &'static str, autofocus_first: bool) -> Html {
    nav_items()
        .into_iter()
        .enumerate()
        .map(|(i, (route, key))| {
            let active = route.is_active_on(current);
            html! {
                <NavLink
                    to={route}
                    class={classes!(class, active.then_some("is-active"))}
                    current={active}
                    autofocus={autofocus_first && i == 0}
                >
                    { t(key) }
                </NavLink>
            }
        })
        .collect()
}

#[function_component(SiteHeader)]
pub fn site_header(props: &Props) -> Html {
    let trigger_ref = use_node_ref();

    {
        let on_drawer = props.on_drawer.clone();
        use_effect_with(props.current.clone(), move |_| {
            on_drawer.emit(false);
            || ()
        });
    }

    let open = {
        let cb = props.on_drawer.clone();
        Callback::from(move |_| cb.emit(true))
    };
    let close = {
        let cb = props.on_drawer.clone();
        Callback::from(move |()| cb.emit(false))
    };
    let close_click = {
        let close = close.clone();
        Callback::from(move |_| close.emit(()))
    };

    html! {
        <header class="site-header">
            <div class="site-header__bar">
                <NavLink to={Route::Home} class={classes!("site-header__home")} aria_label={AttrValue::from(t("site.home_label"))}>
                    { logo("site-header__logo") }
                </NavLink>

                <nav class="site-header__nav" aria-label={t("nav.label")}>
                    { nav_entries(&props.current, "site-header__link", false) }
                    <ThemeToggle />
                </nav>

                <div class="site-header__mobile">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="site-header__menu-btn"
                        aria-label={t("nav.open_menu")}
                        aria-haspopup="dialog"
                        aria-controls={MENU_ID}
                        aria-expanded={if props.drawer_open { "true" } else { "false" }}
                        ref={trigger_ref.clone()}
                        onclick={open}
                    >
                        <svg width="20" height="20" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M4 6h16M4 12h16M4 18h16" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
                        </svg>
                    </button>
                </div>
            </div>

            <Drawer
                open={props.drawer_open}
                id={MENU_ID}
                label={t("nav.mobile_label")}
                on_close={close}
                trigger_ref={trigger_ref}
                class={classes!("site-header__drawer")}
            >
                <div class="drawer__head">
                    <NavLink to={Route::Home} class={classes!("site-header__home")} aria_label={AttrValue::from(t("site.home_label"))}>
                        { logo("site-header__logo site-header__logo--small") }
                    </NavLink>
                    <button type="button" class="drawer__close" aria-label={t("nav.close_menu")} onclick={close_click}>
                        <svg width="20" height="20" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M6 6l12 12M18 6l-12 12" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
                        </svg>
                    </button>
                </div>
                <nav class="drawer__nav" aria-label={t("nav.label")}>
                    { nav_entries(&props.current, "drawer__link", true) }
                </nav>
            </Drawer>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(current: Route, drawer_open: bool) -> String {
        let props = Props {
            current,
            drawer_open,
            on_drawer: Callback::noop(),
        };
        block_on(LocalServerRenderer::<SiteHeader>::with_props(props).render())
    }

    #[test]
    fn marks_the_current_section() {
        let html = render(
            Route::Project {
                slug: "ccte".into(),
            },
            false,
        );
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains(r#"id="mobile-menu""#));
    }

    #[test]
    fn open_drawer_prefers_first_link_for_focus() {
        let html = render(Route::Home, true);
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert_eq!(html.matches("data-autofocus").count(), 1);
    }
}
