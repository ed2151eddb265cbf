use crate::components::drawer::Drawer;
use crate::i18n::{t, t_list};
use crate::router::nav_items;
use yew::prelude::*;

const DEMO_MENU_ID: &str = "demo-mobile-menu";
const DEMO_MAIN_ID: &str = "demo-main";

fn demo_links(class: &'static str, autofocus_first: bool) -> Html {
    nav_items()
        .into_iter()
        .enumerate()
        .map(|(i, (_, key))| {
            html! {
                <a
                    href="#"
                    class={class}
                    data-autofocus={(autofocus_first && i == 0).then_some(AttrValue::Static("true"))}
                >
                    { t(key) }
                </a>
            }
        })
        .collect()
}

fn bullet_list(key: &str) -> Html {
    html! {
        <ul class="bullet-list">
            { for t_list(key).into_iter().map(|item| html! { <li>{ item }</li> }) }
        </ul>
    }
}

/// A self-contained header with its own mobile sheet, so the focus trap can
/// be exercised without the site chrome.
#[function_component(NavDemoPage)]
pub fn nav_demo_page() -> Html {
    let open = use_state(|| false);
    let toggle_ref = use_node_ref();

    let show = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    let hide_click = {
        let hide = hide.clone();
        Callback::from(move |_| hide.emit(()))
    };
    let brand = html! {
        <div class="brand"><span class="brand__accent">{ "Shades" }</span>{ "blue" }</div>
    };

    html! {
        <section class="container page">
            <h1>{ t("nav_demo.title") }</h1>
            <p class="lead">{ t("nav_demo.intro") }</p>

            <div class="nav-demo">
                <a href={format!("#{DEMO_MAIN_ID}")} class="skip-link">{ t("site.skip_link") }</a>
                <header class="nav-demo__header">
                    { brand.clone() }
                    <nav class="nav-demo__desktop" aria-label={t("nav_demo.nav_label")}>
                        { demo_links("nav-demo__link", false) }
                    </nav>
                    <button
                        type="button"
                        class="nav-demo__toggle"
                        aria-label={t("nav.open_menu")}
                        aria-haspopup="dialog"
                        aria-controls={DEMO_MENU_ID}
                        aria-expanded={if *open { "true" } else { "false" }}
                        ref={toggle_ref.clone()}
                        onclick={show}
                    >
                        <span aria-hidden="true">{ "☰" }</span>
                    </button>
                </header>

                <Drawer
                    open={*open}
                    id={DEMO_MENU_ID}
                    label={t("nav.mobile_label")}
                    on_close={hide}
                    trigger_ref={toggle_ref}
                    class={classes!("nav-demo__sheet")}
                >
                    <div class="drawer__head">
                        { brand }
                        <button
                            type="button"
                            class="drawer__close"
                            aria-label={t("nav.close_menu")}
                            onclick={hide_click}
                        >
                            <span aria-hidden="true">{ "✕" }</span>
                        </button>
                    </div>
                    <nav class="drawer__nav" aria-label={t("nav_demo.mobile_nav_label")}>
                        { demo_links("drawer__link", true) }
                    </nav>
                </Drawer>

                <div id={DEMO_MAIN_ID} class="nav-demo__body" tabindex="-1">
                    <p class="small">{ t("nav_demo.body") }</p>
                    <button type="button" class="cta cta--secondary">{ t("nav_demo.focus_me") }</button>
                </div>
            </div>

            <div class="card-grid card-grid--2">
                <div class="card">
                    <h2>{ t("nav_demo.accessible_title") }</h2>
                    { bullet_list("nav_demo.accessible_items") }
                </div>
                <div class="card">
                    <h2>{ t("nav_demo.prod_title") }</h2>
                    { bullet_list("nav_demo.prod_items") }
                </div>
            </div>
        </section>
    }
}
