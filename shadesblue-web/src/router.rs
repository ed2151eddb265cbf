use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:slug")]
    Project { slug: String },
    #[at("/what-i-do")]
    WhatIDo,
    #[at("/contact")]
    Contact,
    #[at("/demo/data-table")]
    DataTable,
    #[at("/demo/accessible-nav")]
    NavDemo,
    #[at("/labs/accordion")]
    AccordionLab,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Primary navigation entries: route and label key.
#[must_use]
pub fn nav_items() -> [(Route, &'static str); 3] {
    [
        (Route::Portfolio, "nav.portfolio"),
        (Route::WhatIDo, "nav.what_i_do"),
        (Route::Contact, "nav.contact"),
    ]
}

impl Route {
    /// Whether a nav entry for `self` should be marked current on `current`.
    ///
    /// Home only matches itself; other entries also match nested routes.
    #[must_use]
    pub fn is_active_on(&self, current: &Self) -> bool {
        let own = self.to_path();
        let here = current.to_path();
        if own == "/" {
            return here == "/";
        }
        here == own || here.starts_with(&format!("{own}/"))
    }
}
