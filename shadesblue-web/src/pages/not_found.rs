use crate::components::nav_link::NavLink;
use crate::router::Route;
use yew::prelude::*;

/// Shown for any path the router does not recognise.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container page not-found" aria-live="assertive">
            <h1>{ crate::i18n::t("not_found.title") }</h1>
            <p>{ crate::i18n::t("not_found.body") }</p>
            <NavLink to={Route::Home} class={classes!("cta", "cta--primary")}>
                { crate::i18n::t("not_found.home") }
            </NavLink>
        </section>
    }
}
