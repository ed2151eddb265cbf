use crate::dom;
use crate::i18n::{t, tr1};
use yew::prelude::*;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let notice = dom::current_year().map_or_else(
        || t("footer.copyright_plain"),
        |year| tr1("footer.copyright", "year", &year.to_string()),
    );
    html! {
        <footer class="site-footer">
            <div class="container site-footer__inner">{ notice }</div>
        </footer>
    }
}
