use crate::components::portfolio_filters::PortfolioFilters;
use crate::components::project_card::ProjectCard;
use crate::dom;
use crate::i18n::t;
use shadesblue_core::{Catalog, ListQuery};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Raw query string of the current location, without `?`.
    #[prop_or_default]
    pub query: AttrValue,
}

/// Project listing driven by `?source=` and `?q=`. Filter changes rewrite the
/// URL in place so the view can be shared and survives reloads.
#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &Props) -> Html {
    let query = {
        let raw = props.query.clone();
        use_state(move || ListQuery::from_query_string(&raw))
    };

    {
        let query = query.clone();
        use_effect_with(props.query.clone(), move |raw| {
            let parsed = ListQuery::from_query_string(raw);
            if *query != parsed {
                query.set(parsed);
            }
            || ()
        });
    }

    let on_change = {
        let query = query.clone();
        Callback::from(move |next: ListQuery| {
            dom::replace_query(&next.to_query_string());
            query.set(next);
        })
    };

    let items = Catalog::embedded().list(&query);

    html! {
        <section class="container page portfolio">
            <h1>{ t("portfolio.title") }</h1>
            <p class="lead">{ t("portfolio.intro") }</p>
            <PortfolioFilters query={(*query).clone()} total={items.len()} {on_change} />
            if items.is_empty() {
                <div class="empty-state">{ t("portfolio.empty") }</div>
            } else {
                <div class="card-grid">
                    { for items.into_iter().map(|p| html! {
                        <ProjectCard key={p.slug.clone()} project={p.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}
