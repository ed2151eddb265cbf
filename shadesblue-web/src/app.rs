use crate::a11y::a11y_css;
use crate::components::accessibility_menu::AccessibilityMenu;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::i18n::t;
use crate::pages::accordion_lab::AccordionLab;
use crate::pages::contact::ContactPage;
use crate::pages::data_table::DataTablePage;
use crate::pages::home::HomePage;
use crate::pages::nav_demo::NavDemoPage;
use crate::pages::not_found::NotFound;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::project::ProjectPage;
use crate::pages::what_i_do::WhatIDoPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ServerAppProps {
    /// Path plus optional `?query`, e.g. `/portfolio?source=client`.
    pub url: AttrValue,
}

/// The full site over an in-memory history, for server rendering.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = use_memo(props.url.clone(), |url| {
        let history = MemoryHistory::new();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        let pairs: Vec<(String, String)> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.replace('+', " ")))
            .collect();
        if pairs.is_empty() || history.push_with_query(path.to_string(), pairs).is_err() {
            history.push(path.to_string());
        }
        AnyHistory::from(history)
    });
    html! {
        <Router history={(*history).clone()}>
            <AppShell />
        </Router>
    }
}

/// Page body for a route. `query` is the location's query string without `?`.
#[must_use]
pub fn switch(route: Route, query: &str) -> Html {
    let query = AttrValue::from(query.to_string());
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Portfolio => html! { <PortfolioPage {query} /> },
        Route::Project { slug } => html! { <ProjectPage slug={AttrValue::from(slug)} /> },
        Route::WhatIDo => html! { <WhatIDoPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::DataTable => html! { <DataTablePage {query} /> },
        Route::NavDemo => html! { <NavDemoPage /> },
        Route::AccordionLab => html! { <AccordionLab /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Site chrome around the routed page: skip link, header, footer and the
/// accessibility menu.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let query = use_location()
        .map(|location| location.query_str().trim_start_matches('?').to_string())
        .unwrap_or_default();
    let drawer_open = use_state(|| false);

    {
        let drawer_open = drawer_open.setter();
        use_effect_with(route.clone(), move |route| {
            drawer_open.set(false);
            // Case studies title themselves
            if !matches!(route, Route::Project { .. }) {
                crate::dom::set_title(&t("site.title"));
            }
            || ()
        });
    }

    let on_drawer = {
        let drawer_open = drawer_open.setter();
        Callback::from(move |open: bool| drawer_open.set(open))
    };
    let close_drawer = {
        let drawer_open = drawer_open.setter();
        Callback::from(move |()| drawer_open.set(false))
    };

    html! {
        <>
            <style>{ a11y_css() }</style>
            <a class="skip-link" href="#main">{ t("site.skip_link") }</a>
            <SiteHeader current={route.clone()} drawer_open={*drawer_open} {on_drawer} />
            <main id="main" tabindex="-1">
                { switch(route, &query) }
            </main>
            <SiteFooter />
            <AccessibilityMenu on_open={close_drawer} />
        </>
    }
}
