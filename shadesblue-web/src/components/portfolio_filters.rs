use crate::i18n::{t, tr1};
use shadesblue_core::{ListQuery, SourceFilter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub query: ListQuery,
    /// Number of projects the current query matches.
    pub total: usize,
    pub on_change: Callback<ListQuery>,
}

#[function_component(PortfolioFilters)]
pub fn portfolio_filters(props: &Props) -> Html {
    let sources = SourceFilter::CHOICES.into_iter().map(|source| {
        let active = props.query.source == source;
        let onclick = {
            let query = props.query.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| on_change.emit(query.clone().with_source(source)))
        };
        html! {
            <button
                type="button"
                class={classes!("filter-chip", active.then_some("is-active"))}
                aria-pressed={if active { "true" } else { "false" }}
                {onclick}
            >
                { t(&format!("portfolio.source.{}", source.as_str())) }
            </button>
        }
    });

    let oninput = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(query.clone().with_search(input.value()));
            }
        })
    };
    let count_key = if props.query.q.trim().is_empty() {
        "portfolio.projects"
    } else {
        "portfolio.results"
    };

    html! {
        <div class="portfolio-filters">
            <div class="portfolio-filters__sources" role="group" aria-label={t("portfolio.sources_label")}>
                { for sources }
            </div>
            <div class="portfolio-filters__search">
                <input
                    type="search"
                    class="portfolio-filters__input"
                    placeholder={t("portfolio.search_placeholder")}
                    aria-label={t("portfolio.search_label")}
                    value={props.query.q.clone()}
                    {oninput}
                />
                <span class="portfolio-filters__count" role="status">
                    { tr1(count_key, "total", &props.total.to_string()) }
                </span>
            </div>
        </div>
    }
}
