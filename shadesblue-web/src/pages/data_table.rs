use crate::components::nav_link::route_href;
use crate::dom;
use crate::i18n::{t, tr};
use crate::router::Route;
use shadesblue_core::table::{self, PAGE_SIZES, SortDir, SortKey, TablePage, TableParams};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const SEARCH_ID: &str = "table-q";
const PER_ID: &str = "table-per";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Raw query string of the current location, without `?`.
    #[prop_or_default]
    pub query: AttrValue,
}

/// "Showing 1–10 of 120 results", with the search term when one is active.
#[must_use]
pub fn showing_text(page: &TablePage<'_>, q: &str) -> String {
    let from = page.first_shown().to_string();
    let to = page.end_idx.to_string();
    let total = page.total.to_string();
    let mut args = BTreeMap::new();
    args.insert("from", from.as_str());
    args.insert("to", to.as_str());
    args.insert("total", total.as_str());
    if q.is_empty() {
        tr("table.showing", Some(&args))
    } else {
        args.insert("q", q);
        tr("table.showing_for", Some(&args))
    }
}

fn page_of(page: &TablePage<'_>) -> String {
    let current = page.page.to_string();
    let pages = page.pages.to_string();
    let mut args = BTreeMap::new();
    args.insert("page", current.as_str());
    args.insert("pages", pages.as_str());
    tr("table.page_of", Some(&args))
}

/// Anchor click handler that swaps the table state in place of a page load.
fn follow(href: String, go: &Callback<String>) -> Callback<MouseEvent> {
    let go = go.clone();
    Callback::from(move |e: MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        go.emit(href.clone());
    })
}

fn header_cell(params: &TableParams, column: SortKey, go: &Callback<String>) -> Html {
    let active = params.sort == column;
    let href = params.sort_href(column);
    html! {
        <th scope="col" aria-sort={params.aria_sort(column)}>
            <a
                href={href.clone()}
                class={classes!("sort-link", active.then_some("is-active"))}
                onclick={follow(href, go)}
            >
                { t(&format!("table.columns.{}", column.as_str())) }
                if active {
                    <span aria-hidden="true" class="sort-link__dir">
                        { if params.dir == SortDir::Asc { "▲" } else { "▼" } }
                    </span>
                }
            </a>
        </th>
    }
}

fn pager_link(label: String, href: Option<String>, go: &Callback<String>) -> Html {
    match href {
        Some(href) => html! {
            <a class="pager__link" href={href.clone()} onclick={follow(href, go)}>{ label }</a>
        },
        None => html! {
            <a class="pager__link is-disabled" aria-disabled="true">{ label }</a>
        },
    }
}

#[function_component(DataTablePage)]
pub fn data_table_page(props: &Props) -> Html {
    let params = {
        let raw = props.query.clone();
        use_state(move || TableParams::from_query_string(&raw))
    };
    let q_ref = use_node_ref();
    let per_ref = use_node_ref();

    {
        let params = params.clone();
        use_effect_with(props.query.clone(), move |raw| {
            let parsed = TableParams::from_query_string(raw);
            if *params != parsed {
                params.set(parsed);
            }
            || ()
        });
    }

    let go = {
        let params = params.clone();
        Callback::from(move |href: String| {
            let query = href.trim_start_matches('?');
            dom::replace_query(query);
            params.set(TableParams::from_query_string(query));
        })
    };
    let onsubmit = {
        let params = params.clone();
        let go = go.clone();
        let q_ref = q_ref.clone();
        let per_ref = per_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let q = q_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_else(|| params.q.clone());
            let per = per_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| params.per.to_string());
            go.emit(params.href_with(&[("q", q.trim()), ("per", per.as_str()), ("page", "1")]));
        })
    };
    let clear_href = route_href(&Route::DataTable);
    let clear = follow(String::new(), &go);

    let page = table::run(table::rows(), &params);
    let headers: Html = SortKey::ALL
        .into_iter()
        .map(|column| header_cell(&params, column, &go))
        .collect();
    let body: Html = if page.rows.is_empty() {
        html! {
            <tr>
                <td colspan="6" class="data-table__empty">{ t("table.empty") }</td>
            </tr>
        }
    } else {
        page.rows
            .iter()
            .map(|row| {
                html! {
                    <tr key={row.id}>
                        <td class="data-table__name">{ row.name.clone() }</td>
                        <td>{ row.role.to_string() }</td>
                        <td>{ row.dept.to_string() }</td>
                        <td>{ row.loc.to_string() }</td>
                        <td><time datetime={row.start.clone()}>{ row.start.clone() }</time></td>
                        <td>{ table::format_money(row.salary) }</td>
                    </tr>
                }
            })
            .collect()
    };
    let prev = page
        .has_prev()
        .then(|| params.page_href(page.page - 1));
    let next = page
        .has_next()
        .then(|| params.page_href(page.page + 1));

    html! {
        <section class="container page data-table">
            <h1>{ t("table.title") }</h1>
            <p class="lead">{ t("table.intro") }</p>

            <form class="data-table__controls" aria-label={t("table.controls")} {onsubmit}>
                <div class="field">
                    <label for={SEARCH_ID}>{ t("table.search") }</label>
                    <input
                        id={SEARCH_ID}
                        name="q"
                        type="search"
                        value={params.q.clone()}
                        placeholder={t("table.search_placeholder")}
                        ref={q_ref}
                    />
                </div>
                <div class="field">
                    <label for={PER_ID}>{ t("table.per_page") }</label>
                    <select id={PER_ID} name="per" ref={per_ref}>
                        { for PAGE_SIZES.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*size == params.per}>
                                { size.to_string() }
                            </option>
                        }) }
                    </select>
                </div>
                <button type="submit" class="cta cta--primary">{ t("table.apply") }</button>
                <a class="cta cta--secondary" href={clear_href} onclick={clear}>{ t("table.clear") }</a>
            </form>

            <p class="data-table__count" aria-live="polite">{ showing_text(&page, &params.q) }</p>

            <div class="data-table__scroll">
                <table>
                    <caption class="sr-only">{ t("table.caption") }</caption>
                    <thead>
                        <tr>{ headers }</tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>

            <div class="pager">
                <span class="pager__status">{ page_of(&page) }</span>
                <div class="pager__links">
                    { pager_link(t("table.prev"), prev, &go) }
                    { pager_link(t("table.next"), next, &go) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(query: &'static str) -> String {
        let props = Props {
            query: AttrValue::Static(query),
        };
        block_on(LocalServerRenderer::<DataTablePage>::with_props(props).render())
    }

    #[test]
    fn default_view_sorts_by_name_ascending() {
        let html = render("");
        assert!(html.contains(r#"aria-sort="ascending""#), "{html}");
        assert_eq!(html.matches(r#"aria-sort="none""#).count(), 5);
        assert!(html.contains("Showing 1–10 of 120 results"));
        assert!(html.contains("Page 1 of 12"));
        assert!(html.contains(r#"aria-disabled="true""#));
    }

    #[test]
    fn active_column_link_flips_direction() {
        let html = render("sort=salary&dir=desc");
        assert!(html.contains(r#"aria-sort="descending""#));
        assert!(html.contains("sort=salary&amp;dir=asc") || html.contains("sort=salary&dir=asc"));
    }

    #[test]
    fn search_without_matches_shows_the_empty_row() {
        let html = render("q=zzzz");
        assert!(html.contains("No results. Try clearing filters."));
        assert!(html.contains("Showing 0–0 of 0 results for “zzzz”"));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn showing_text_mentions_the_query() {
        let params = TableParams::from_query_string("q=memphis&per=20");
        let page = table::run(table::rows(), &params);
        let text = showing_text(&page, &params.q);
        assert!(text.ends_with("for “memphis”"), "{text}");
    }
}
